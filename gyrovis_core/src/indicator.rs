use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

use gyrovis_device::{Accuracy, GyroSample, SamplingInterval, SensorEvent, SensorHandle, SensorKind};

use crate::source::{Repainter, SensorListener, SensorSource};

/// Subscription guard and latest-reading cache behind the gyroscope widget.
///
/// Cheap to clone; the host keeps one handle for drawing while the attached
/// source holds the listener side. Every `start` must be paired with an
/// eventual `stop` before the owner goes away.
#[derive(Clone)]
pub struct GyroIndicator(Arc<Shared>);

struct Shared {
    source: Mutex<Option<Arc<dyn SensorSource>>>,
    sensor: Mutex<Option<SensorHandle>>,
    interval: Mutex<SamplingInterval>,
    started: AtomicBool,
    reading: Mutex<GyroSample>,
    repainter: Mutex<Option<Arc<dyn Repainter>>>,
}

impl GyroIndicator {
    pub fn new() -> Self {
        GyroIndicator(Arc::new(Shared {
            source: Mutex::new(None),
            sensor: Mutex::new(None),
            interval: Mutex::new(SamplingInterval::default()),
            started: AtomicBool::new(false),
            reading: Mutex::new(GyroSample::default()),
            repainter: Mutex::new(None),
        }))
    }

    /// Binds the indicator to a source. A source without a gyroscope is not
    /// an error; `start` simply never has anything to register.
    pub fn attach_source(&self, source: Arc<dyn SensorSource>) {
        *self.0.sensor.lock().unwrap() = source.default_sensor(SensorKind::Gyroscope);
        *self.0.source.lock().unwrap() = Some(source);
    }

    pub fn set_repainter(&self, repainter: Arc<dyn Repainter>) {
        *self.0.repainter.lock().unwrap() = Some(repainter);
    }

    pub fn set_interval(&self, interval: SamplingInterval) {
        *self.0.interval.lock().unwrap() = interval;
    }

    pub fn interval(&self) -> SamplingInterval {
        *self.0.interval.lock().unwrap()
    }

    pub fn start(&self) {
        let Some(source) = self.0.source.lock().unwrap().clone() else {
            return;
        };
        let Some(sensor) = self.0.sensor.lock().unwrap().clone() else {
            return;
        };

        if self.0.started.swap(true, Ordering::SeqCst) {
            return;
        }

        let interval = *self.0.interval.lock().unwrap();
        source.register(&sensor, self.0.clone(), interval);
    }

    pub fn stop(&self) {
        if !self.0.started.swap(false, Ordering::SeqCst) {
            return;
        }

        let Some(source) = self.0.source.lock().unwrap().clone() else {
            return;
        };

        let listener: Arc<dyn SensorListener> = self.0.clone();
        source.unregister(&listener);
    }

    pub fn started(&self) -> bool {
        self.0.started.load(Ordering::Relaxed)
    }

    pub fn sample(&self) -> GyroSample {
        *self.0.reading.lock().unwrap()
    }
}

impl SensorListener for Shared {
    fn on_reading(&self, event: &SensorEvent) {
        if event.sensor.kind != SensorKind::Gyroscope {
            return;
        }

        *self.reading.lock().unwrap() = event.sample();

        if let Some(repainter) = self.repainter.lock().unwrap().as_ref() {
            repainter.request_repaint();
        }
    }

    fn on_accuracy_changed(&self, _sensor: &SensorHandle, _accuracy: Accuracy) {}
}
