use super::const_error;

const_error!(INTERNAL, INTERNAL_SERVER_ERROR, 0, "internal server error");
const_error!(
    JSON_MISSING_FIELDS,
    UNPROCESSABLE_ENTITY,
    1,
    "missing fields"
);
const_error!(JSON_SYNTAX_ERROR, BAD_REQUEST, 2, "syntax error");
const_error!(
    JSON_CONTENT_TYPE,
    BAD_REQUEST,
    3,
    "missing or wrong content-type"
);
const_error!(JSON_VALIDATE_INVALID, BAD_REQUEST, 4, "invalid data");
const_error!(QUERY_INVALID, BAD_REQUEST, 5, "invalid query parameters");
const_error!(MULTIPART_INVALID, BAD_REQUEST, 6, "invalid multipart form");
const_error!(MISSING_TEST_ID, UNPROCESSABLE_ENTITY, 7, "missing test_id");
const_error!(ATTACHMENT_EMPTY, BAD_REQUEST, 8, "empty file");
const_error!(ATTACHMENT_TOO_LARGE, BAD_REQUEST, 9, "file is too large");
const_error!(
    STORAGE_UNAVAILABLE,
    BAD_GATEWAY,
    10,
    "object storage request failed"
);
const_error!(
    MULTIPART_VALIDATE_INVALID,
    BAD_REQUEST,
    11,
    "invalid form data"
);
