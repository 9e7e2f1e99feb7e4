use std::time::Duration;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::metadata::domain::MetadataResolver;
use crate::metadata::open_library::OpenLibraryResolver;

pub fn create_resolver(config: &Configuration) -> LibraryResult<Box<dyn MetadataResolver>> {
    let resolver = OpenLibraryResolver::new(
        config.open_library_url.as_str(), Duration::from_secs(config.lookup_timeout_secs))?;
    Ok(Box::new(resolver))
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::metadata::factory::create_resolver;

    #[tokio::test]
    async fn test_should_create_resolver() {
        let _ = create_resolver(&Configuration::new()).expect("should create resolver");
    }
}
