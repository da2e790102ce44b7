use async_trait::async_trait;
use rusoto_cloudwatch::{CloudWatch, CloudWatchClient, DescribeAlarmsInput, PutMetricAlarmInput};
use rusoto_core::Region;

use crate::alarm::AlarmSpec;
use crate::error::ProvisionerError;

pub struct CloudWatchAlarmClient {
    client: CloudWatchClient,
}

#[async_trait]
pub trait AlarmStore: Send + Sync {
    /// Whether an alarm named `spec.name` is already configured.
    async fn alarm_exists(&self, spec: &AlarmSpec) -> Result<bool, ProvisionerError>;

    async fn put_alarm(&self, spec: &AlarmSpec) -> Result<(), ProvisionerError>;
}

#[async_trait]
impl AlarmStore for CloudWatchAlarmClient {
    async fn alarm_exists(&self, spec: &AlarmSpec) -> Result<bool, ProvisionerError> {
        let output = self
            .client
            .describe_alarms(DescribeAlarmsInput {
                alarm_names: Some(vec![spec.name.clone()]),
                ..Default::default()
            })
            .await?;
        Ok(output
            .metric_alarms
            .unwrap_or_default()
            .iter()
            .any(|alarm| alarm.alarm_name.as_deref() == Some(spec.name.as_str())))
    }

    async fn put_alarm(&self, spec: &AlarmSpec) -> Result<(), ProvisionerError> {
        self.client
            .put_metric_alarm(PutMetricAlarmInput::from(spec))
            .await?;
        Ok(())
    }
}

impl CloudWatchAlarmClient {
    pub fn new(region: Region) -> Self {
        Self::new_with_client(CloudWatchClient::new(region))
    }

    fn new_with_client(client: CloudWatchClient) -> Self {
        CloudWatchAlarmClient { client }
    }
}
