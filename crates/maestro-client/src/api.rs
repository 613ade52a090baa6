//! Typed calls for each maestro endpoint.

use serde::Deserialize;

use maestro_core::prelude::*;
use maestro_core::{DomainRecord, ProcessPatch, ProcessRecord};

use crate::client::ResourceClient;
use crate::paths::ResourcePath;

/// A body that is either a single record or an array of records.
///
/// `GET /domains/{key}` wraps its one domain in an array. `Many` is tried
/// first: a record with all-default fields would also accept `[]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    /// The first record. An empty array is a parse failure.
    pub fn into_first(self) -> Result<T> {
        match self {
            OneOrMany::One(item) => Ok(item),
            OneOrMany::Many(items) => items
                .into_iter()
                .next()
                .ok_or_else(|| Error::parse("expected one record, got an empty array")),
        }
    }
}

/// `GET /domains/`
pub async fn fetch_domains<C: ResourceClient>(client: &C) -> Result<Vec<DomainRecord>> {
    client.fetch(&ResourcePath::domains()).await
}

/// `GET /domains/{key}`
pub async fn fetch_domain<C: ResourceClient>(client: &C, key: &str) -> Result<DomainRecord> {
    let body: OneOrMany<DomainRecord> = client.fetch(&ResourcePath::domain(key)).await?;
    body.into_first()
}

/// `GET /processes/{key}`
pub async fn fetch_process<C: ResourceClient>(client: &C, key: &str) -> Result<ProcessRecord> {
    client.fetch(&ResourcePath::process(key)).await
}

/// `PATCH /processes/{key}`, returning the record as the server now holds it.
pub async fn patch_process<C: ResourceClient>(
    client: &C,
    key: &str,
    patch: &ProcessPatch,
) -> Result<ProcessRecord> {
    client.update(&ResourcePath::process(key), patch).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{FixtureResourceClient, DEMO_DOMAIN_PATH};
    use maestro_core::encode_path_key;

    #[test]
    fn test_one_or_many_accepts_object_and_array() {
        let one: OneOrMany<DomainRecord> = serde_json::from_str(r#"{"Name":"d01"}"#).unwrap();
        assert_eq!(one.into_first().unwrap().name, "d01");

        let many: OneOrMany<DomainRecord> =
            serde_json::from_str(r#"[{"Name":"d01"},{"Name":"d02"}]"#).unwrap();
        assert_eq!(many.into_first().unwrap().name, "d01");
    }

    #[test]
    fn test_one_or_many_empty_array_is_parse_error() {
        let empty: OneOrMany<DomainRecord> = serde_json::from_str("[]").unwrap();
        assert!(matches!(empty.into_first(), Err(Error::Parse { .. })));
    }

    #[tokio::test]
    async fn test_fetch_domain_unwraps_array() {
        let client = FixtureResourceClient::demo();
        let domain = fetch_domain(&client, &encode_path_key(DEMO_DOMAIN_PATH))
            .await
            .unwrap();
        assert_eq!(domain.name, "d01");
        assert_eq!(domain.runtime.agents.len(), 1);
    }
}
