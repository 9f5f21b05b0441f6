use super::StringTable;

pub const STRINGS: StringTable = StringTable {
    default_name: "AAAARG!!! - CLI",
    default_banner: "AAAARG!!! - Welcome to the CLI",
    text_choice_not_char: "AAAARG!!! - Text choices must be a single character.",
    text_choice_not_lower: "AAAARG!!! - Text choices must be lowercase.",
    no_help: "AAAARG!!! - No help text available.",
    invalid_response: "AAAARG!!! - A valid response is required.",
    bad_format: "AAAARG!!! - Response does not match the format:",
    not_an_integer: "AAAARG!!! - Response must be an integer.",
    range_error: "AAAARG!!! - Response must be between the following, inclusively:",
    true_string: "AAAARG!!! - True, yes, on",
    false_string: "AAAARG!!! - False, no, off",
    acknowledge: "AAAARG!!! - Acknowledge message?",
};
