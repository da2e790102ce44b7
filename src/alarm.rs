use crate::invocation_arn::NotificationTarget;
use rusoto_cloudwatch::{Dimension, PutMetricAlarmInput};

const PERIOD_SECONDS: i64 = 60;
const EVALUATION_PERIODS: i64 = 1;
const STATISTIC: &str = "Average";

const CPU_UTILIZATION_THRESHOLD: f64 = 70.0;
// 5 GB
const FREE_STORAGE_SPACE_THRESHOLD: f64 = 5_000_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResourceKind {
    Compute,
    Database,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ComparisonOperator {
    GreaterThanThreshold,
    LessThanOrEqualToThreshold,
}

impl ComparisonOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOperator::GreaterThanThreshold => "GreaterThanThreshold",
            ComparisonOperator::LessThanOrEqualToThreshold => "LessThanOrEqualToThreshold",
        }
    }
}

impl ResourceKind {
    fn name_prefix(&self) -> &'static str {
        match self {
            ResourceKind::Compute => "EC2_CPU_Utilization",
            ResourceKind::Database => "RDS_Free_Storage_Space",
        }
    }

    pub fn dimension_name(&self) -> &'static str {
        match self {
            ResourceKind::Compute => "InstanceId",
            ResourceKind::Database => "DBInstanceIdentifier",
        }
    }

    fn namespace(&self) -> &'static str {
        match self {
            ResourceKind::Compute => "AWS/EC2",
            ResourceKind::Database => "AWS/RDS",
        }
    }

    fn metric_name(&self) -> &'static str {
        match self {
            ResourceKind::Compute => "CPUUtilization",
            ResourceKind::Database => "FreeStorageSpace",
        }
    }

    fn comparison_operator(&self) -> ComparisonOperator {
        match self {
            ResourceKind::Compute => ComparisonOperator::GreaterThanThreshold,
            ResourceKind::Database => ComparisonOperator::LessThanOrEqualToThreshold,
        }
    }

    fn threshold(&self) -> f64 {
        match self {
            ResourceKind::Compute => CPU_UTILIZATION_THRESHOLD,
            ResourceKind::Database => FREE_STORAGE_SPACE_THRESHOLD,
        }
    }

    fn description(&self, resource_id: &str) -> String {
        match self {
            ResourceKind::Compute => format!(
                "Alarm for EC2 instance {} CPU utilization exceeding 70%",
                resource_id
            ),
            ResourceKind::Database => format!(
                "Alarm for RDS instance {} free storage space less than 5 GB",
                resource_id
            ),
        }
    }

    /// Deterministic alarm name for a resource of this kind.
    pub fn alarm_name(&self, resource_id: &str) -> String {
        format!("{}_{}", self.name_prefix(), resource_id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlarmDimension {
    pub name: String,
    pub value: String,
}

/// Default alarm for one resource. Built per resource and never changed.
#[derive(Debug, Clone, PartialEq)]
pub struct AlarmSpec {
    pub name: String,
    pub resource_id: String,
    pub comparison_operator: ComparisonOperator,
    pub metric_name: String,
    pub namespace: String,
    pub period: i64,
    pub evaluation_periods: i64,
    pub statistic: String,
    pub threshold: f64,
    pub actions_enabled: bool,
    pub description: String,
    pub dimension: AlarmDimension,
    pub notification_target: NotificationTarget,
}

impl AlarmSpec {
    pub fn for_resource(
        kind: ResourceKind,
        resource_id: &str,
        notification_target: &NotificationTarget,
        actions_enabled: bool,
    ) -> Self {
        AlarmSpec {
            name: kind.alarm_name(resource_id),
            resource_id: resource_id.to_string(),
            comparison_operator: kind.comparison_operator(),
            metric_name: kind.metric_name().to_string(),
            namespace: kind.namespace().to_string(),
            period: PERIOD_SECONDS,
            evaluation_periods: EVALUATION_PERIODS,
            statistic: STATISTIC.to_string(),
            threshold: kind.threshold(),
            actions_enabled,
            description: kind.description(resource_id),
            dimension: AlarmDimension {
                name: kind.dimension_name().to_string(),
                value: resource_id.to_string(),
            },
            notification_target: notification_target.clone(),
        }
    }
}

impl From<&AlarmSpec> for PutMetricAlarmInput {
    fn from(spec: &AlarmSpec) -> Self {
        PutMetricAlarmInput {
            alarm_name: spec.name.clone(),
            comparison_operator: spec.comparison_operator.as_str().to_string(),
            evaluation_periods: spec.evaluation_periods,
            metric_name: Some(spec.metric_name.clone()),
            namespace: Some(spec.namespace.clone()),
            period: Some(spec.period),
            statistic: Some(spec.statistic.clone()),
            threshold: Some(spec.threshold),
            actions_enabled: Some(spec.actions_enabled),
            alarm_description: Some(spec.description.clone()),
            dimensions: Some(vec![Dimension {
                name: spec.dimension.name.clone(),
                value: spec.dimension.value.clone(),
            }]),
            alarm_actions: Some(vec![spec.notification_target.arn().to_string()]),
            ..Default::default()
        }
    }
}
