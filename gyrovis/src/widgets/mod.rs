pub mod gyro_indicator;
