#[cfg(test)]
mod tests {
    use super::super::*;
    use airaware_db::SortOrder;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.database.url, "sqlite://data/air.db");
        assert!(config.database.initialize_schema);
        assert_eq!(config.query.sort_order, SortOrder::Descending);
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = Config::from_toml(
            r#"
            [database]
            url = "sqlite://other.db"
            read_only = true

            [query]
            sort_order = "asc"
            "#,
        )
        .unwrap();
        assert_eq!(config.database.url, "sqlite://other.db");
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.query.sort_order, SortOrder::Ascending);

        let pool = config.database.pool_settings();
        assert!(pool.read_only);
        assert!(!pool.create_if_missing);
    }

    #[test]
    fn test_unknown_sort_order_is_rejected() {
        let result = Config::from_toml("[query]\nsort_order = \"sideways\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_socket_addr() {
        let server = ServerConfig { port: 8080, ..ServerConfig::default() };
        assert_eq!(server.socket_addr().unwrap().to_string(), "127.0.0.1:8080");
    }
}
