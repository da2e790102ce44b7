mod alarm;
mod cloud_watch_alarm_client;
mod config;
mod ec2_instance_client;
mod error;
mod invocation_arn;
mod provisioner;
mod rds_instance_client;

use std::sync::Arc;

use lambda_runtime::{handler_fn, Context, Error};
use rusoto_core::Region;
use serde_json::Value;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cloud_watch_alarm_client::CloudWatchAlarmClient;
use crate::config::Config;
use crate::ec2_instance_client::Ec2InstanceClient;
use crate::provisioner::{AlarmProvisioner, ProvisionReport};
use crate::rds_instance_client::RdsInstanceClient;

type Provisioner = AlarmProvisioner<Ec2InstanceClient, RdsInstanceClient, CloudWatchAlarmClient>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .without_time()
        .init();

    let config = Config::default();
    let region = Region::default();
    let provisioner = Arc::new(AlarmProvisioner::new(
        Ec2InstanceClient::new(region.clone()),
        RdsInstanceClient::new(region.clone()),
        CloudWatchAlarmClient::new(region),
        config,
    ));

    lambda_runtime::run(handler_fn(move |event: Value, context: Context| {
        let provisioner = Arc::clone(&provisioner);
        async move { provision_handler(&provisioner, event, context).await }
    }))
    .await?;
    Ok(())
}

async fn provision_handler(
    provisioner: &Provisioner,
    _: Value,
    context: Context,
) -> Result<ProvisionReport, Error> {
    provisioner
        .provision(&context.invoked_function_arn)
        .await
        .map_err(|e| {
            error!(request_id = %context.request_id, error = %e, "alarm provisioning failed");
            e.into()
        })
}
