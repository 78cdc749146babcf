use super::const_error;

const_error!(INTERNAL, INTERNAL_SERVER_ERROR, 0, "internal server error");
const_error!(DATABASE_ERROR, INTERNAL_SERVER_ERROR, 1, "database error");
const_error!(JSON_MISSING_FIELDS, BAD_REQUEST, 2, "missing fields");
const_error!(JSON_SYNTAX_ERROR, BAD_REQUEST, 3, "syntax error");
const_error!(
    JSON_CONTENT_TYPE,
    BAD_REQUEST,
    4,
    "missing or wrong content-type"
);
const_error!(JSON_VALIDATE_INVALID, BAD_REQUEST, 5, "invalid data");
const_error!(NO_CAFES, NOT_FOUND, 6, "No cafes available");
const_error!(CAFE_NOT_FOUND, NOT_FOUND, 7, "Cafe not found");
const_error!(
    DUPLICATE_CAFE_NAME,
    CONFLICT,
    8,
    "Cafe with this name already exists"
);
const_error!(
    LOCATION_REQUIRED,
    BAD_REQUEST,
    9,
    "Location parameter 'loc' is required"
);
const_error!(
    /// Handlers replace the message with one naming the searched location.
    NO_CAFES_IN_LOCATION,
    NOT_FOUND,
    10,
    "No cafes found in the location"
);
const_error!(
    COFFEE_PRICE_REQUIRED,
    BAD_REQUEST,
    11,
    "New coffee price is required"
);
const_error!(UNAUTHORIZED, UNAUTHORIZED, 12, "Unauthorized, invalid API key");
