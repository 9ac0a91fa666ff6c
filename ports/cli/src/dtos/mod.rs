pub(crate) mod telemetry_code;
