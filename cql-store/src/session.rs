// Copyright 2025 The cqlweb Authors
// Licensed under the Apache License, Version 2.0

//! Native protocol session

use async_trait::async_trait;
use cql_common::{Config, Consistency, CqlError, Result, Row, RowSource};
use scylla::statement::Consistency as DriverConsistency;
use scylla::{ExecutionProfile, Session, SessionBuilder};
use tracing::{debug, info};

use crate::value::rows_to_json;

/// Row source backed by a live cluster session
///
/// The driver pools connections internally, so one store is shared by
/// every request.
pub struct ScyllaStore {
    session: Session,
    contact_points: Vec<String>,
}

impl ScyllaStore {
    /// Connect to the cluster described by `config`
    pub async fn connect(config: &Config) -> Result<Self> {
        info!(
            "Connecting to cluster at {} (consistency {:?})",
            config.contact_points.join(","),
            config.consistency
        );

        let profile = ExecutionProfile::builder()
            .consistency(driver_consistency(config.consistency))
            .build();

        let mut builder = SessionBuilder::new()
            .known_nodes(&config.contact_points)
            .default_execution_profile_handle(profile.into_handle());

        if let (Some(user), Some(pass)) = (&config.username, &config.password) {
            builder = builder.user(user, pass);
        }

        let session = builder
            .build()
            .await
            .map_err(|e| CqlError::ConnectionError(e.to_string()))?;

        info!("Connected to cluster");

        Ok(Self {
            session,
            contact_points: config.contact_points.clone(),
        })
    }

    pub fn contact_points(&self) -> &[String] {
        &self.contact_points
    }
}

#[async_trait]
impl RowSource for ScyllaStore {
    async fn query(&self, cql: &str) -> Result<Vec<Row>> {
        let result = self
            .session
            .query_unpaged(cql, ())
            .await
            .map_err(|e| CqlError::QueryError(e.to_string()))?;

        let names: Vec<String> = result
            .col_specs()
            .iter()
            .map(|spec| spec.name.clone())
            .collect();
        let rows = rows_to_json(&names, result.rows_or_empty());

        debug!(rows = rows.len(), columns = names.len(), "query returned");
        Ok(rows)
    }
}

fn driver_consistency(consistency: Consistency) -> DriverConsistency {
    match consistency {
        Consistency::Any => DriverConsistency::Any,
        Consistency::One => DriverConsistency::One,
        Consistency::Two => DriverConsistency::Two,
        Consistency::Three => DriverConsistency::Three,
        Consistency::Quorum => DriverConsistency::Quorum,
        Consistency::All => DriverConsistency::All,
        Consistency::LocalQuorum => DriverConsistency::LocalQuorum,
        Consistency::EachQuorum => DriverConsistency::EachQuorum,
        Consistency::LocalOne => DriverConsistency::LocalOne,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consistency_mapping() {
        assert_eq!(driver_consistency(Consistency::One), DriverConsistency::One);
        assert_eq!(driver_consistency(Consistency::LocalQuorum), DriverConsistency::LocalQuorum);
        assert_eq!(driver_consistency(Consistency::EachQuorum), DriverConsistency::EachQuorum);
    }

    #[tokio::test]
    async fn test_connect_failure_is_connection_error() {
        // Nothing listens on port 1; connecting must fail without panicking.
        let mut config = Config::default();
        config.contact_points = vec!["127.0.0.1:1".to_string()];

        match ScyllaStore::connect(&config).await {
            Err(CqlError::ConnectionError(_)) => {}
            Err(other) => panic!("expected connection error, got {:?}", other),
            Ok(_) => panic!("connected to a closed port"),
        }
    }
}
