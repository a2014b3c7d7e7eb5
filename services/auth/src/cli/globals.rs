use secrecy::SecretString;

/// Default session token lifetime: 30 days.
pub const DEFAULT_SESSION_TTL_SECONDS: u64 = 60 * 60 * 24 * 30;

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub session_secret: SecretString,
    pub session_ttl: u64,
    pub bcrypt_cost: u32,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(session_secret: SecretString) -> Self {
        Self {
            session_secret,
            session_ttl: DEFAULT_SESSION_TTL_SECONDS,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }

    pub fn set_session_ttl(&mut self, seconds: u64) {
        self.session_ttl = seconds;
    }

    pub fn set_bcrypt_cost(&mut self, cost: u32) {
        self.bcrypt_cost = cost;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_global_args() {
        let args = GlobalArgs::new(SecretString::from("not-a-real-secret".to_string()));
        assert_eq!(args.session_secret.expose_secret(), "not-a-real-secret");
        assert_eq!(args.session_ttl, DEFAULT_SESSION_TTL_SECONDS);
        assert_eq!(args.bcrypt_cost, bcrypt::DEFAULT_COST);
    }

    #[test]
    fn test_global_args_setters() {
        let mut args = GlobalArgs::new(SecretString::from("not-a-real-secret".to_string()));
        args.set_session_ttl(3600);
        args.set_bcrypt_cost(4);
        assert_eq!(args.session_ttl, 3600);
        assert_eq!(args.bcrypt_cost, 4);
    }
}
