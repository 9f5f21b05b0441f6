use super::StringTable;

pub const STRINGS: StringTable = StringTable {
    default_name: "CLI",
    default_banner: "Welcome to the CLI",
    text_choice_not_char: "Text choices must be a single character.",
    text_choice_not_lower: "Text choices must be lowercase.",
    no_help: "No help text available.",
    invalid_response: "A valid response is required.",
    bad_format: "Response does not match the format:",
    not_an_integer: "Response must be an integer.",
    range_error: "Response must be between the following, inclusively:",
    true_string: "True, yes, on",
    false_string: "False, no, off",
    acknowledge: "Acknowledge message?",
};
