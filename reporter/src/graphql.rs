/// Mutation document sent for every synthetic reading. Field set mirrors
/// the generated `createDeviceStatus` operation of the DeviceStatus model.
pub const CREATE_DEVICE_STATUS: &str = r#"
  mutation CreateDeviceStatus($input: CreateDeviceStatusInput!) {
    createDeviceStatus(input: $input) {
      id
      device_Id
      humidity
      temperature
      voltage
      last_updated
      status_code
      status_description
      status_state
      createdAt
      updatedAt
    }
  }
"#;
