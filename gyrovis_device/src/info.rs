use std::{fmt::Debug, ops::Deref, sync::Arc};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorKind {
    Accelerometer,
    Gyroscope,
    Magnetometer,
}

impl SensorKind {
    pub fn name(&self) -> &'static str {
        match self {
            SensorKind::Accelerometer => "Accelerometer",
            SensorKind::Gyroscope => "Gyroscope",
            SensorKind::Magnetometer => "Magnetometer",
        }
    }
}

/// Accuracy tier reported alongside a sensor channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Accuracy {
    Unreliable,
    Low,
    Medium,
    High,
}

#[derive(Clone, Debug)]
pub struct SensorInfo {
    name: String,
    pub kind: SensorKind,
}

impl SensorInfo {
    pub fn new(name: String, kind: SensorKind) -> Self {
        SensorInfo { name, kind }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Clone)]
pub struct SensorHandle(Arc<SensorInfo>);

impl SensorHandle {
    pub fn new(info: SensorInfo) -> Self {
        SensorHandle(Arc::new(info))
    }
}

impl Deref for SensorHandle {
    type Target = SensorInfo;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Debug for SensorHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.0.name, self.0.kind.name())
    }
}

// Handle equality is identity: two sensors are the same sensor only if they
// came from the same source registration.
impl PartialEq for SensorHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for SensorHandle {}
