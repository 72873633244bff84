use std::{
    sync::{Arc, Mutex, Weak},
    thread,
    time::{Duration, Instant},
};

use gyrovis_core::source::{same_listener, SensorListener, SensorSource};
use gyrovis_device::{GyroSample, SamplingInterval, SensorEvent, SensorHandle, SensorInfo, SensorKind};
use log::{debug, warn};

mod wave;

const TICK: Duration = Duration::from_millis(5);

/// Stand-in for a platform sensor manager: one gyroscope, fed by a synthetic
/// wobble on a background thread.
pub struct SimSensors {
    gyro: SensorHandle,
    listeners: Mutex<Vec<Registration>>,
}

struct Registration {
    listener: Arc<dyn SensorListener>,
    interval: SamplingInterval,
    last_delivery: Option<Instant>,
}

pub fn start() -> Arc<SimSensors> {
    let sensors = Arc::new(SimSensors {
        gyro: SensorHandle::new(SensorInfo::new(
            "Simulated Gyroscope".into(),
            SensorKind::Gyroscope,
        )),
        listeners: Mutex::new(Vec::new()),
    });

    let weak = Arc::downgrade(&sensors);
    thread::spawn(move || run(weak));

    sensors
}

fn run(sensors: Weak<SimSensors>) {
    let started = Instant::now();

    loop {
        thread::sleep(TICK);

        let Some(sensors) = sensors.upgrade() else {
            break;
        };

        sensors.dispatch(wave::wobble(started.elapsed().as_secs_f32()));
    }
}

impl SimSensors {
    fn dispatch(&self, sample: GyroSample) {
        let mut listeners = self.listeners.lock().unwrap();

        for registration in listeners.iter_mut() {
            let due = match registration.last_delivery {
                Some(last) => last.elapsed() >= registration.interval.period(),
                None => true,
            };

            if !due {
                continue;
            }

            registration.last_delivery = Some(Instant::now());
            registration.listener.on_reading(&SensorEvent::new(
                self.gyro.clone(),
                [sample.x, sample.y, sample.z],
            ));
        }
    }
}

impl SensorSource for SimSensors {
    fn default_sensor(&self, kind: SensorKind) -> Option<SensorHandle> {
        (kind == SensorKind::Gyroscope).then(|| self.gyro.clone())
    }

    fn register(
        &self,
        sensor: &SensorHandle,
        listener: Arc<dyn SensorListener>,
        interval: SamplingInterval,
    ) {
        if *sensor != self.gyro {
            warn!("ignoring registration for unknown sensor {sensor:?}");
            return;
        }

        debug!("registering listener at {} rate", interval.name());

        self.listeners.lock().unwrap().push(Registration {
            listener,
            interval,
            last_delivery: None,
        });
    }

    fn unregister(&self, listener: &Arc<dyn SensorListener>) {
        debug!("unregistering listener");

        self.listeners
            .lock()
            .unwrap()
            .retain(|registration| !same_listener(&registration.listener, listener));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use gyrovis_device::Accuracy;

    use super::*;

    #[derive(Default)]
    struct CountingListener {
        readings: AtomicUsize,
    }

    impl SensorListener for CountingListener {
        fn on_reading(&self, event: &SensorEvent) {
            assert_eq!(event.sensor.kind, SensorKind::Gyroscope);
            self.readings.fetch_add(1, Ordering::SeqCst);
        }

        fn on_accuracy_changed(&self, _sensor: &SensorHandle, _accuracy: Accuracy) {}
    }

    #[test]
    fn offers_only_a_gyroscope() {
        let sensors = start();

        assert!(sensors.default_sensor(SensorKind::Gyroscope).is_some());
        assert!(sensors.default_sensor(SensorKind::Accelerometer).is_none());
        assert!(sensors.default_sensor(SensorKind::Magnetometer).is_none());
    }

    #[test]
    fn rejects_a_foreign_sensor_handle() {
        let sensors = start();
        let foreign = SensorHandle::new(SensorInfo::new(
            "other gyro".into(),
            SensorKind::Gyroscope,
        ));

        let listener = Arc::new(CountingListener::default());
        sensors.register(&foreign, listener, SamplingInterval::Fastest);

        assert!(sensors.listeners.lock().unwrap().is_empty());
    }

    #[test]
    fn delivers_until_unregistered() {
        let sensors = start();
        let gyro = sensors.default_sensor(SensorKind::Gyroscope).unwrap();

        let listener = Arc::new(CountingListener::default());
        sensors.register(&gyro, listener.clone(), SamplingInterval::Fastest);

        let deadline = Instant::now() + Duration::from_secs(2);
        while listener.readings.load(Ordering::SeqCst) == 0 && Instant::now() < deadline {
            thread::sleep(TICK);
        }
        assert!(listener.readings.load(Ordering::SeqCst) > 0);

        let registered: Arc<dyn SensorListener> = listener.clone();
        sensors.unregister(&registered);
        let delivered = listener.readings.load(Ordering::SeqCst);

        thread::sleep(TICK * 10);
        assert_eq!(listener.readings.load(Ordering::SeqCst), delivered);
    }
}
