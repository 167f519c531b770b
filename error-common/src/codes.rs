// Error codes for the admission desk
// Codes are stable strings so they can be matched in logs

pub mod input {
    pub const INVALID_INTEGER: &str = "INPUT_1001";
    pub const IO_FAILURE: &str = "INPUT_1002";
}

pub mod notification {
    pub const DELIVERY_FAILED: &str = "NOTIFY_2001";
}

pub mod billing {
    pub const AMOUNT_OVERFLOW: &str = "BILLING_3001";
}

pub mod system {
    pub const CONFIGURATION: &str = "SYS_4001";
}
