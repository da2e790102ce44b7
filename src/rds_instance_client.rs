use async_trait::async_trait;
use rusoto_core::Region;
use rusoto_rds::{DBInstanceMessage, DescribeDBInstancesMessage, Rds, RdsClient};
use tracing::debug;

use crate::error::ProvisionerError;

const PAGE_SIZE: i64 = 100;

pub struct RdsInstanceClient {
    client: RdsClient,
}

#[async_trait]
pub trait DescribeDbInstances {
    /// Identifiers of every db instance visible to the caller, in provider order.
    async fn describe_all_db_instances(&self) -> Result<Vec<String>, ProvisionerError>;
}

#[async_trait]
impl DescribeDbInstances for RdsInstanceClient {
    async fn describe_all_db_instances(&self) -> Result<Vec<String>, ProvisionerError> {
        let mut identifiers = Vec::<String>::new();
        let mut marker = None;
        loop {
            let request = DescribeDBInstancesMessage {
                max_records: Some(PAGE_SIZE),
                marker: marker.take(),
                ..DescribeDBInstancesMessage::default()
            };
            let message = self.client.describe_db_instances(request).await?;
            marker = message.marker.clone();

            let page = Self::db_instance_identifiers(message);
            debug!(db_instances = page.len(), "described rds page");
            identifiers.extend(page);

            if marker.is_none() {
                break;
            }
        }
        Ok(identifiers)
    }
}

impl RdsInstanceClient {
    pub fn new(region: Region) -> Self {
        Self::new_with_client(RdsClient::new(region))
    }

    fn new_with_client(client: RdsClient) -> Self {
        RdsInstanceClient { client }
    }

    fn db_instance_identifiers(message: DBInstanceMessage) -> Vec<String> {
        message
            .db_instances
            .unwrap_or_default()
            .into_iter()
            .filter_map(|instance| instance.db_instance_identifier)
            .collect()
    }
}
