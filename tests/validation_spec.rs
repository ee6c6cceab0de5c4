mod common;

#[cfg(test)]
mod validation_spec {
    use course_api::cli::server::Server;
    use course_core::blueprint::Blueprint;
    use course_core::config::reader::ConfigReader;

    // tests all the invalid configs
    #[tokio::test]
    async fn validate() -> anyhow::Result<()> {
        let reader = ConfigReader::init(crate::common::init());
        let mut checked = 0;
        for entry in std::fs::read_dir("tests/invalid_configs")? {
            let entry = entry?;
            let path = entry.path();
            if path.is_dir() {
                continue;
            }

            let path = path.to_str().unwrap();
            let config = reader.read(path).await?;
            let blueprint = Blueprint::try_from(config);
            assert!(blueprint.is_err(), "Expected error for {}", path);
            checked += 1;
        }
        assert!(checked > 0);
        Ok(())
    }

    #[tokio::test]
    async fn valid_configs() -> anyhow::Result<()> {
        let reader = ConfigReader::init(crate::common::init());
        for path in ["tests/server/config.json", "tests/server/config_seeded.json"] {
            let config = reader.read(path).await?;
            assert!(Blueprint::try_from(config).is_ok(), "Expected {} to be valid", path);
        }
        Ok(())
    }

    #[tokio::test]
    async fn fork_start_rejects_zero_workers() -> anyhow::Result<()> {
        let reader = ConfigReader::init(crate::common::init());
        let config = reader.read("tests/invalid_configs/zero_workers.json").await?;
        let error = Server::new(config).fork_start().await.unwrap_err();
        assert!(error.to_string().contains("workers"), "{}", error);
        Ok(())
    }
}
