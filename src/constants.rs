// General
pub const CONTACTS_TABLE: &str = "contacts";

// Ids
pub const MIN_CONTACT_ID: u64 = 1_000_000_000;
pub const MAX_CONTACT_ID: u64 = 10_000_000_000; // exclusive
pub const MAX_ID_ATTEMPTS: usize = 16;
pub const MAX_RECORD_KEY_CHARACTERS: usize = 64;

// Validation
pub const NAME_MISSING: &str = "name missing";
pub const NUMBER_MISSING: &str = "number missing";
pub const NAME_NOT_UNIQUE: &str = "name must be unique";
pub const MALFORMED_ID: &str = "malformatted id";
pub const UNKNOWN_ENDPOINT: &str = "unknown endpoint";

// Demo data for the in-memory store
pub const SEED_CONTACTS: [(u64, &str, &str); 4] = [
    (1, "Arto Hellas", "040-123456"),
    (2, "Ada Lovelace", "39-44-5323523"),
    (3, "Dan Abramov", "12-43-234345"),
    (4, "Mary Poppendieck", "39-23-6423122"),
];
