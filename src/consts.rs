// The minimum and maximum length of the national significant number.
pub const MIN_LENGTH_FOR_NSN: usize = 2;
// The ITU says the maximum length should be 15, but we have found longer
// numbers in Germany.
pub const MAX_LENGTH_FOR_NSN: usize = 17;
/// The maximum length of the country calling code.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 3;

pub const PLUS_SIGN: &'static str = "+";
pub const PLUS_CHARS: &'static str = "+\u{FF0B}";

// Regular expression of acceptable punctuation found in phone numbers. This
// consists of dash characters, white space characters, full stops, slashes,
// square brackets, parentheses and tildes. It also includes the letter 'x'
// as that is found as a placeholder for carrier information in some phone
// numbers. Full-width variants are also present. The square brackets are
// escaped so the set can be spliced into a character class.
pub const VALID_PUNCTUATION: &'static str = "-x\
\u{2010}-\u{2015}\u{2212}\u{30FC}\u{FF0D}-\u{FF0F} \u{00A0}\
\u{00AD}\u{200B}\u{2060}\u{3000}()\u{FF08}\u{FF09}\\[\\]\
.\u{FF3B}\u{FF3D}/~\u{2053}\u{223C}";

pub const DIGITS: &'static str = r"\p{Nd}";
pub const STAR_SIGN: &'static str = "*";
pub const VALID_ALPHA: &'static str = "A-Za-z";

pub const RFC3966_PREFIX: &'static str = "tel:";
pub const RFC3966_EXTN_PREFIX: &'static str = ";ext=";

// Default extension prefix to use when formatting. This will be put in front
// of any extension component of the number, after the main national number
// is formatted. Region metadata may override it with a preferred prefix.
pub const DEFAULT_EXTN_PREFIX: &'static str = " ext. ";

pub const REGION_CODE_FOR_NON_GEO_ENTITY: &'static str = "001";

pub const NANPA_COUNTRY_CODE: u16 = 1;
