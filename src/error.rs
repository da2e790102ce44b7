use rusoto_cloudwatch::{DescribeAlarmsError, PutMetricAlarmError};
use rusoto_core::RusotoError;
use rusoto_ec2::DescribeInstancesError;
use rusoto_rds::DescribeDBInstancesError;
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum ProvisionerError {
    #[error("Invalid invocation arn: {0}")]
    InvalidArn(String),

    #[error("Failed to describe instances: {0}")]
    DescribeInstances(#[from] RusotoError<DescribeInstancesError>),

    #[error("Failed to describe db instances: {0}")]
    DescribeDbInstances(#[from] RusotoError<DescribeDBInstancesError>),

    #[error("Failed to describe alarms: {0}")]
    DescribeAlarms(#[from] RusotoError<DescribeAlarmsError>),

    #[error("Failed to put metric alarm: {0}")]
    PutMetricAlarm(#[from] RusotoError<PutMetricAlarmError>),
}

#[cfg(test)]
mod tests {
    use crate::error::ProvisionerError;
    use rusoto_core::RusotoError;
    use rusoto_ec2::DescribeInstancesError;
    use std::error::Error;

    #[test]
    fn test_display_invalid_arn() {
        let error = ProvisionerError::InvalidArn("arn:aws:lambda".to_string());
        assert_eq!(error.to_string(), "Invalid invocation arn: arn:aws:lambda");
    }

    #[test]
    fn test_source_of_sdk_error() {
        let error = ProvisionerError::from(RusotoError::<DescribeInstancesError>::Validation(
            "bad request".to_string(),
        ));
        assert!(error.source().is_some());
        assert!(ProvisionerError::InvalidArn("arn".to_string())
            .source()
            .is_none());
    }
}
