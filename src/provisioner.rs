use serde::Serialize;
use std::convert::TryFrom;
use tracing::info;

use crate::alarm::{AlarmSpec, ResourceKind};
use crate::cloud_watch_alarm_client::AlarmStore;
use crate::config::Config;
use crate::ec2_instance_client::DescribeInstances;
use crate::error::ProvisionerError;
use crate::invocation_arn::{InvocationArn, NotificationTarget};
use crate::rds_instance_client::DescribeDbInstances;

#[derive(Debug, PartialEq, Serialize)]
pub struct ComputeInstance {
    #[serde(rename = "InstanceId")]
    pub instance_id: String,
    #[serde(rename = "HasCloudWatchAlarm")]
    pub has_cloud_watch_alarm: bool,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct DatabaseInstance {
    #[serde(rename = "DBInstanceIdentifier")]
    pub db_instance_identifier: String,
    #[serde(rename = "HasCloudWatchAlarm")]
    pub has_cloud_watch_alarm: bool,
}

/// Handler output. `HasCloudWatchAlarm` is what the existence check saw
/// before any alarm was created in this invocation.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct ProvisionReport {
    #[serde(rename = "EC2Instances")]
    pub ec2_instances: Vec<ComputeInstance>,
    #[serde(rename = "RDSInstances")]
    pub rds_instances: Vec<DatabaseInstance>,
    #[serde(skip)]
    pub alarms_created: usize,
}

pub struct AlarmProvisioner<E, R, A> {
    ec2: E,
    rds: R,
    alarms: A,
    config: Config,
}

impl<E, R, A> AlarmProvisioner<E, R, A>
where
    E: DescribeInstances + Send + Sync,
    R: DescribeDbInstances + Send + Sync,
    A: AlarmStore,
{
    pub fn new(ec2: E, rds: R, alarms: A, config: Config) -> Self {
        AlarmProvisioner {
            ec2,
            rds,
            alarms,
            config,
        }
    }

    /// Runs one pass over every EC2 and RDS instance, creating the default
    /// alarm wherever none exists. The first failing call aborts the pass;
    /// alarms created before it are kept.
    pub async fn provision(
        &self,
        invoked_function_arn: &str,
    ) -> Result<ProvisionReport, ProvisionerError> {
        let invocation = InvocationArn::try_from(invoked_function_arn)?;
        let target = NotificationTarget::resolve(&invocation, &self.config.topic_name);
        info!(topic = %target, "resolved notification target");

        let mut report = ProvisionReport::default();

        for instance_id in self.ec2.describe_all_instances().await? {
            let has_alarm = self
                .ensure_alarm(ResourceKind::Compute, &instance_id, &target, &mut report)
                .await?;
            report.ec2_instances.push(ComputeInstance {
                instance_id,
                has_cloud_watch_alarm: has_alarm,
            });
        }

        for db_instance_identifier in self.rds.describe_all_db_instances().await? {
            let has_alarm = self
                .ensure_alarm(
                    ResourceKind::Database,
                    &db_instance_identifier,
                    &target,
                    &mut report,
                )
                .await?;
            report.rds_instances.push(DatabaseInstance {
                db_instance_identifier,
                has_cloud_watch_alarm: has_alarm,
            });
        }

        info!(
            ec2_instances = report.ec2_instances.len(),
            rds_instances = report.rds_instances.len(),
            alarms_created = report.alarms_created,
            "alarm provisioning finished"
        );
        Ok(report)
    }

    /// Returns whether the resource already had an alarm.
    async fn ensure_alarm(
        &self,
        kind: ResourceKind,
        resource_id: &str,
        target: &NotificationTarget,
        report: &mut ProvisionReport,
    ) -> Result<bool, ProvisionerError> {
        let spec = AlarmSpec::for_resource(kind, resource_id, target, self.config.actions_enabled);
        let created = self.create_alarm_if_absent(&spec).await?;
        if created {
            report.alarms_created += 1;
        }
        Ok(!created)
    }

    /// Looks the alarm up by name right before `PutMetricAlarm`; one lookup per resource.
    async fn create_alarm_if_absent(&self, spec: &AlarmSpec) -> Result<bool, ProvisionerError> {
        if self.alarms.alarm_exists(spec).await? {
            info!(alarm = %spec.name, resource = %spec.resource_id, "alarm already exists, skipping");
            return Ok(false);
        }
        self.alarms.put_alarm(spec).await?;
        info!(alarm = %spec.name, resource = %spec.resource_id, "created alarm");
        Ok(true)
    }
}
