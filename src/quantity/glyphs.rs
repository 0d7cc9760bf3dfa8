// Vulgar fractions, the fraction slash, superscript and subscript digits,
// mapped to their ASCII spelling. Stored recipe text depends on this exact set.
const FRACTION_TRANSLATION: [(char, &str); 39] = [
    // vulgar fractions
    ('\u{00BC}', "1/4"),
    ('\u{00BD}', "1/2"),
    ('\u{00BE}', "3/4"),
    ('\u{2150}', "1/7"),
    ('\u{2151}', "1/9"),
    ('\u{2152}', "1/10"),
    ('\u{2153}', "1/3"),
    ('\u{2154}', "2/3"),
    ('\u{2155}', "1/5"),
    ('\u{2156}', "2/5"),
    ('\u{2157}', "3/5"),
    ('\u{2158}', "4/5"),
    ('\u{2159}', "1/6"),
    ('\u{215A}', "5/6"),
    ('\u{215B}', "1/8"),
    ('\u{215C}', "3/8"),
    ('\u{215D}', "5/8"),
    ('\u{215E}', "7/8"),
    // fraction slash
    ('\u{2044}', "/"),
    // superscripts
    ('\u{2070}', "0"),
    ('\u{00B9}', "1"),
    ('\u{00B2}', "2"),
    ('\u{00B3}', "3"),
    ('\u{2074}', "4"),
    ('\u{2075}', "5"),
    ('\u{2076}', "6"),
    ('\u{2077}', "7"),
    ('\u{2078}', "8"),
    ('\u{2079}', "9"),
    // subscripts
    ('\u{2080}', "0"),
    ('\u{2081}', "1"),
    ('\u{2082}', "2"),
    ('\u{2083}', "3"),
    ('\u{2084}', "4"),
    ('\u{2085}', "5"),
    ('\u{2086}', "6"),
    ('\u{2087}', "7"),
    ('\u{2088}', "8"),
    ('\u{2089}', "9"),
];

fn lookup(c: char) -> Option<&'static str> {
    FRACTION_TRANSLATION
        .iter()
        .find(|(glyph, _)| *glyph == c)
        .map(|(_, ascii)| *ascii)
}

/// Replace fraction glyphs with parsable ASCII ("¼" -> "1/4")
pub fn translate_fractions(text: &str) -> String {
    let mut translated = String::with_capacity(text.len());
    for c in text.chars() {
        match lookup(c) {
            Some(ascii) => translated.push_str(ascii),
            None => translated.push(c),
        }
    }
    translated
}
