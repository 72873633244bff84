mod info;
mod rate;
mod sample;

pub use self::info::{Accuracy, SensorHandle, SensorInfo, SensorKind};
pub use self::rate::SamplingInterval;
pub use self::sample::{GyroSample, SensorEvent};
