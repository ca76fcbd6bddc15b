mod helpers;
mod test_auth;
