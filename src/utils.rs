use std::path::PathBuf;

/// Get public assets directory from environment variable or use default
pub fn get_public_dir() -> PathBuf {
    std::env::var("PUBLIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("public"))
}

/// Get server port from environment variable or use default
pub fn get_default_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8080)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_public_dir_default() {
        std::env::remove_var("PUBLIC_DIR");
        assert_eq!(get_public_dir(), PathBuf::from("public"));
    }
}
