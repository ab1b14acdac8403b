//! Shared test inputs

/// A small status file: one parameter, two rows of Description/ValueString/Severity
pub fn status_file() -> Vec<u8> {
    let mut data = b"SDDS1\n\
        &parameter name=Time, type=double, &end\n\
        &column name=Description, type=string, &end\n\
        &column name=ValueString, type=string, &end\n\
        &column name=Severity, type=short, &end\n\
        &data mode=binary, &end\n"
        .to_vec();

    data.extend_from_slice(&2i32.to_le_bytes());
    data.extend_from_slice(&1.5f64.to_le_bytes());
    for (description, value, severity) in [("Current", "103.5", 0i16), (" ShutterStatus", "ON", 2)] {
        put_string(&mut data, description);
        put_string(&mut data, value);
        data.extend_from_slice(&severity.to_le_bytes());
    }
    data
}

fn put_string(data: &mut Vec<u8>, s: &str) {
    data.extend_from_slice(&(s.len() as i32).to_le_bytes());
    data.extend_from_slice(s.as_bytes());
}
