use async_trait::async_trait;
use rusoto_core::Region;
use rusoto_ec2::{DescribeInstancesRequest, DescribeInstancesResult, Ec2, Ec2Client};
use tracing::debug;

use crate::error::ProvisionerError;

const PAGE_SIZE: i64 = 100;

pub struct Ec2InstanceClient {
    client: Ec2Client,
}

#[async_trait]
pub trait DescribeInstances {
    /// Ids of every instance visible to the caller, in provider order.
    async fn describe_all_instances(&self) -> Result<Vec<String>, ProvisionerError>;
}

#[async_trait]
impl DescribeInstances for Ec2InstanceClient {
    async fn describe_all_instances(&self) -> Result<Vec<String>, ProvisionerError> {
        let mut instance_ids = Vec::<String>::new();
        let mut next_token = None;
        loop {
            let request = DescribeInstancesRequest {
                max_results: Some(PAGE_SIZE),
                next_token: next_token.take(),
                ..DescribeInstancesRequest::default()
            };
            let result = self.client.describe_instances(request).await?;
            next_token = result.next_token.clone();

            let page = Self::instance_ids(result);
            debug!(instances = page.len(), "described ec2 page");
            instance_ids.extend(page);

            if next_token.is_none() {
                break;
            }
        }
        Ok(instance_ids)
    }
}

impl Ec2InstanceClient {
    pub fn new(region: Region) -> Self {
        Self::new_with_client(Ec2Client::new(region))
    }

    fn new_with_client(client: Ec2Client) -> Self {
        Ec2InstanceClient { client }
    }

    fn instance_ids(result: DescribeInstancesResult) -> Vec<String> {
        result
            .reservations
            .unwrap_or_default()
            .into_iter()
            .flat_map(|reservation| reservation.instances.unwrap_or_default())
            .filter_map(|instance| instance.instance_id)
            .collect()
    }
}
