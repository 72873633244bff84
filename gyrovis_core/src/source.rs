use std::sync::Arc;

use gyrovis_device::{Accuracy, SamplingInterval, SensorEvent, SensorHandle, SensorKind};

/// Sensor-manager-like capability a host injects into the indicator.
pub trait SensorSource: Send + Sync {
    fn default_sensor(&self, kind: SensorKind) -> Option<SensorHandle>;

    fn register(
        &self,
        sensor: &SensorHandle,
        listener: Arc<dyn SensorListener>,
        interval: SamplingInterval,
    );

    fn unregister(&self, listener: &Arc<dyn SensorListener>);
}

pub trait SensorListener: Send + Sync {
    fn on_reading(&self, event: &SensorEvent);

    fn on_accuracy_changed(&self, sensor: &SensorHandle, accuracy: Accuracy);
}

/// Explicit redraw request back to whatever hosts the widget.
pub trait Repainter: Send + Sync {
    fn request_repaint(&self);
}

impl<F: Fn() + Send + Sync> Repainter for F {
    fn request_repaint(&self) {
        self()
    }
}

// Compares the data pointers only; vtable pointers are not stable enough to
// identify a listener across crates.
pub fn same_listener(a: &Arc<dyn SensorListener>, b: &Arc<dyn SensorListener>) -> bool {
    Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
}
