use fractic_server_error::define_client_error;

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(
    InvalidTimestamp,
    "Invalid RFC 3339 timestamp: {timestamp}.",
    { timestamp: &str }
);
define_client_error!(InvalidAmount, "Invalid amount: '{value}'.", { value: &str });
define_client_error!(InvalidFlag, "Invalid true/false value: '{value}'.", { value: &str });
define_client_error!(
    UnknownParkingLocation,
    "Unknown parking location: '{location}'.",
    { location: &str }
);
define_client_error!(UnknownPosition, "Unknown position: '{position}'.", { position: &str });

// Entry-related.
define_client_error!(MissingPersonName, "A name is required for a parking entry.");
define_client_error!(
    InvalidDuration,
    "Invalid parking duration ({hours} hours). Presets must be between 1 and 12 hours, and custom durations must be positive.",
    { hours: f64 }
);
define_client_error!(
    InvalidHourlyRate,
    "Invalid hourly rate ({rate}). The hourly rate must be positive.",
    { rate: f64 }
);
define_client_error!(
    MissingBankName,
    "A bank name is required when the bank is not one of the listed banks."
);
define_client_error!(MissingAccountNumber, "An account number is required.");

// Store-related.
define_client_error!(RecordNotFound, "No parking record with id '{id}'.", { id: &str });
