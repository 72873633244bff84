pub mod indicator;
pub mod source;

pub use self::indicator::GyroIndicator;
pub use self::source::{Repainter, SensorListener, SensorSource};
