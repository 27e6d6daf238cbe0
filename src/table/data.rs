//! Curated precomposed Latin letters, keyed by diacritic.
//!
//! Only the uppercase form of each letter is listed; lowercase forms are
//! derived when the tables are built.

use crate::Diacritic;

pub(super) static FORWARD: &[(Diacritic, &[(char, char)])] = &[
    (
        Diacritic::ACUTE,
        &[
            ('A', '\u{00c1}'), ('C', '\u{0106}'), ('E', '\u{00c9}'), ('G', '\u{01f4}'),
            ('I', '\u{00cd}'), ('K', '\u{1e30}'), ('L', '\u{0139}'), ('M', '\u{1e3e}'),
            ('N', '\u{0143}'), ('O', '\u{00d3}'), ('P', '\u{1e54}'), ('R', '\u{0154}'),
            ('S', '\u{015a}'), ('U', '\u{00da}'), ('W', '\u{1e82}'), ('Y', '\u{00dd}'),
            ('Z', '\u{0179}'),
        ],
    ),
    (Diacritic::ACUTE.union(Diacritic::DOTABOVE), &[('S', '\u{1e64}')]),
    (Diacritic::BAR, &[('C', '\u{a792}'), ('L', '\u{023d}')]),
    (Diacritic::BELT, &[('L', '\u{a7ad}')]),
    (
        Diacritic::BREVE,
        &[
            ('A', '\u{0102}'), ('E', '\u{0114}'), ('G', '\u{011e}'), ('I', '\u{012c}'),
            ('O', '\u{014e}'), ('U', '\u{016c}'),
        ],
    ),
    (Diacritic::ACUTE.union(Diacritic::BREVE), &[('A', '\u{1eae}')]),
    (Diacritic::BREVE.union(Diacritic::DOTBELOW), &[('A', '\u{1eb6}')]),
    (Diacritic::BREVE.union(Diacritic::GRAVE), &[('A', '\u{1eb0}')]),
    (Diacritic::BREVE.union(Diacritic::HOOKABOVE), &[('A', '\u{1eb2}')]),
    (Diacritic::BREVE.union(Diacritic::TILDE), &[('A', '\u{1eb4}')]),
    (Diacritic::BREVEBELOW, &[('H', '\u{1e2a}')]),
    (
        Diacritic::CARON,
        &[
            ('A', '\u{01cd}'), ('C', '\u{010c}'), ('D', '\u{01c5}'), ('E', '\u{011a}'),
            ('G', '\u{01e6}'), ('H', '\u{021e}'), ('I', '\u{01cf}'), ('K', '\u{01e8}'),
            ('L', '\u{013d}'), ('N', '\u{0147}'), ('O', '\u{01d1}'), ('R', '\u{0158}'),
            ('S', '\u{0160}'), ('T', '\u{0164}'), ('U', '\u{01d3}'), ('Z', '\u{017d}'),
        ],
    ),
    (Diacritic::CARON.union(Diacritic::DOTABOVE), &[('S', '\u{1e66}')]),
    (
        Diacritic::CEDILLA,
        &[
            ('C', '\u{00c7}'), ('D', '\u{1e10}'), ('E', '\u{0228}'), ('G', '\u{0122}'),
            ('H', '\u{1e28}'), ('K', '\u{0136}'), ('L', '\u{013b}'), ('N', '\u{0145}'),
            ('R', '\u{0156}'), ('S', '\u{015e}'), ('T', '\u{0162}'),
        ],
    ),
    (Diacritic::ACUTE.union(Diacritic::CEDILLA), &[('C', '\u{1e08}')]),
    (Diacritic::BREVE.union(Diacritic::CEDILLA), &[('E', '\u{1e1c}')]),
    (
        Diacritic::CIRCUMFLEX,
        &[
            ('A', '\u{00c2}'), ('C', '\u{0108}'), ('E', '\u{00ca}'), ('G', '\u{011c}'),
            ('H', '\u{0124}'), ('I', '\u{00ce}'), ('J', '\u{0134}'), ('O', '\u{00d4}'),
            ('S', '\u{015c}'), ('U', '\u{00db}'), ('W', '\u{0174}'), ('Y', '\u{0176}'),
            ('Z', '\u{1e90}'),
        ],
    ),
    (
        Diacritic::ACUTE.union(Diacritic::CIRCUMFLEX),
        &[
            ('A', '\u{1ea4}'), ('E', '\u{1ebe}'), ('O', '\u{1ed0}'),
        ],
    ),
    (
        Diacritic::CIRCUMFLEX.union(Diacritic::DOTBELOW),
        &[
            ('A', '\u{1eac}'), ('E', '\u{1ec6}'), ('O', '\u{1ed8}'),
        ],
    ),
    (
        Diacritic::CIRCUMFLEX.union(Diacritic::GRAVE),
        &[
            ('A', '\u{1ea6}'), ('E', '\u{1ec0}'), ('O', '\u{1ed2}'),
        ],
    ),
    (
        Diacritic::CIRCUMFLEX.union(Diacritic::HOOKABOVE),
        &[
            ('A', '\u{1ea8}'), ('E', '\u{1ec2}'), ('O', '\u{1ed4}'),
        ],
    ),
    (
        Diacritic::CIRCUMFLEX.union(Diacritic::TILDE),
        &[
            ('A', '\u{1eaa}'), ('E', '\u{1ec4}'), ('O', '\u{1ed6}'),
        ],
    ),
    (
        Diacritic::CIRCUMFLEXBELOW,
        &[
            ('D', '\u{1e12}'), ('E', '\u{1e18}'), ('L', '\u{1e3c}'), ('N', '\u{1e4a}'),
            ('T', '\u{1e70}'), ('U', '\u{1e76}'),
        ],
    ),
    (Diacritic::COMMABELOW, &[('S', '\u{0218}'), ('T', '\u{021a}')]),
    (Diacritic::CROSSEDTAIL, &[('J', '\u{a7b2}')]),
    (
        Diacritic::DESCENDER,
        &[
            ('H', '\u{2c67}'), ('K', '\u{2c69}'), ('N', '\u{a790}'), ('Z', '\u{2c6b}'),
        ],
    ),
    (
        Diacritic::DIAERESIS,
        &[
            ('A', '\u{00c4}'), ('E', '\u{00cb}'), ('H', '\u{1e26}'), ('I', '\u{00cf}'),
            ('O', '\u{00d6}'), ('U', '\u{00dc}'), ('W', '\u{1e84}'), ('X', '\u{1e8c}'),
            ('Y', '\u{0178}'),
        ],
    ),
    (Diacritic::ACUTE.union(Diacritic::DIAERESIS), &[('I', '\u{1e2e}'), ('U', '\u{01d7}')]),
    (Diacritic::CARON.union(Diacritic::DIAERESIS), &[('U', '\u{01d9}')]),
    (Diacritic::DIAERESIS.union(Diacritic::GRAVE), &[('U', '\u{01db}')]),
    (Diacritic::DIAERESIS.union(Diacritic::MACRON), &[('U', '\u{1e7a}')]),
    (Diacritic::DIAERESISBELOW, &[('U', '\u{1e72}')]),
    (
        Diacritic::DIAGONALSTROKE,
        &[
            ('K', '\u{a742}'), ('Q', '\u{a758}'), ('T', '\u{023e}'), ('V', '\u{a75e}'),
        ],
    ),
    (Diacritic::DOT, &[('C', '\u{a73e}')]),
    (
        Diacritic::DOTABOVE,
        &[
            ('A', '\u{0226}'), ('B', '\u{1e02}'), ('C', '\u{010a}'), ('D', '\u{1e0a}'),
            ('E', '\u{0116}'), ('F', '\u{1e1e}'), ('G', '\u{0120}'), ('H', '\u{1e22}'),
            ('I', '\u{0130}'), ('M', '\u{1e40}'), ('N', '\u{1e44}'), ('O', '\u{022e}'),
            ('P', '\u{1e56}'), ('R', '\u{1e58}'), ('S', '\u{1e60}'), ('T', '\u{1e6a}'),
            ('W', '\u{1e86}'), ('X', '\u{1e8a}'), ('Y', '\u{1e8e}'), ('Z', '\u{017b}'),
        ],
    ),
    (Diacritic::DOTABOVE.union(Diacritic::MACRON), &[('A', '\u{01e0}'), ('O', '\u{0230}')]),
    (
        Diacritic::DOTBELOW,
        &[
            ('A', '\u{1ea0}'), ('B', '\u{1e04}'), ('D', '\u{1e0c}'), ('E', '\u{1eb8}'),
            ('H', '\u{1e24}'), ('I', '\u{1eca}'), ('K', '\u{1e32}'), ('L', '\u{1e36}'),
            ('M', '\u{1e42}'), ('N', '\u{1e46}'), ('O', '\u{1ecc}'), ('R', '\u{1e5a}'),
            ('S', '\u{1e62}'), ('T', '\u{1e6c}'), ('U', '\u{1ee4}'), ('V', '\u{1e7e}'),
            ('W', '\u{1e88}'), ('Y', '\u{1ef4}'), ('Z', '\u{1e92}'),
        ],
    ),
    (Diacritic::DOTABOVE.union(Diacritic::DOTBELOW), &[('S', '\u{1e68}')]),
    (Diacritic::DOTBELOW.union(Diacritic::MACRON), &[('L', '\u{1e38}'), ('R', '\u{1e5c}')]),
    (Diacritic::DOUBLEACUTE, &[('O', '\u{0150}'), ('U', '\u{0170}')]),
    (Diacritic::DOUBLEBAR, &[('L', '\u{2c60}')]),
    (
        Diacritic::DOUBLEGRAVE,
        &[
            ('A', '\u{0200}'), ('E', '\u{0204}'), ('I', '\u{0208}'), ('O', '\u{020c}'),
            ('R', '\u{0210}'), ('U', '\u{0214}'),
        ],
    ),
    (Diacritic::FLOURISH, &[('B', '\u{a796}'), ('P', '\u{a752}')]),
    (
        Diacritic::GRAVE,
        &[
            ('A', '\u{00c0}'), ('E', '\u{00c8}'), ('I', '\u{00cc}'), ('N', '\u{01f8}'),
            ('O', '\u{00d2}'), ('U', '\u{00d9}'), ('W', '\u{1e80}'), ('Y', '\u{1ef2}'),
        ],
    ),
    (Diacritic::HIGHSTROKE, &[('L', '\u{a748}')]),
    (
        Diacritic::HOOK,
        &[
            ('B', '\u{0181}'), ('C', '\u{0187}'), ('D', '\u{018a}'), ('F', '\u{0191}'),
            ('G', '\u{0193}'), ('H', '\u{a7aa}'), ('K', '\u{0198}'), ('M', '\u{2c6e}'),
            ('P', '\u{01a4}'), ('S', '\u{a7c5}'), ('T', '\u{01ac}'), ('V', '\u{01b2}'),
            ('W', '\u{2c72}'), ('Y', '\u{01b3}'), ('Z', '\u{0224}'),
        ],
    ),
    (
        Diacritic::HOOKABOVE,
        &[
            ('A', '\u{1ea2}'), ('E', '\u{1eba}'), ('I', '\u{1ec8}'), ('O', '\u{1ece}'),
            ('U', '\u{1ee6}'), ('Y', '\u{1ef6}'),
        ],
    ),
    (Diacritic::HOOKTAIL, &[('Q', '\u{024a}')]),
    (Diacritic::HORN, &[('O', '\u{01a0}'), ('U', '\u{01af}')]),
    (Diacritic::ACUTE.union(Diacritic::HORN), &[('O', '\u{1eda}'), ('U', '\u{1ee8}')]),
    (Diacritic::DOTBELOW.union(Diacritic::HORN), &[('O', '\u{1ee2}'), ('U', '\u{1ef0}')]),
    (Diacritic::GRAVE.union(Diacritic::HORN), &[('O', '\u{1edc}'), ('U', '\u{1eea}')]),
    (Diacritic::HOOKABOVE.union(Diacritic::HORN), &[('O', '\u{1ede}'), ('U', '\u{1eec}')]),
    (Diacritic::HORN.union(Diacritic::TILDE), &[('O', '\u{1ee0}'), ('U', '\u{1eee}')]),
    (
        Diacritic::INVERTEDBREVE,
        &[
            ('A', '\u{0202}'), ('E', '\u{0206}'), ('I', '\u{020a}'), ('O', '\u{020e}'),
            ('R', '\u{0212}'), ('U', '\u{0216}'),
        ],
    ),
    (Diacritic::LEFTHOOK, &[('N', '\u{019d}')]),
    (
        Diacritic::LINEBELOW,
        &[
            ('B', '\u{1e06}'), ('D', '\u{1e0e}'), ('K', '\u{1e34}'), ('L', '\u{1e3a}'),
            ('N', '\u{1e48}'), ('R', '\u{1e5e}'), ('T', '\u{1e6e}'), ('Z', '\u{1e94}'),
        ],
    ),
    (Diacritic::LONGRIGHTLEG, &[('N', '\u{0220}')]),
    (Diacritic::LONGSTROKEOVERLAY, &[('O', '\u{a74a}')]),
    (Diacritic::LOOP, &[('O', '\u{a74c}'), ('Y', '\u{1efe}')]),
    (
        Diacritic::MACRON,
        &[
            ('A', '\u{0100}'), ('E', '\u{0112}'), ('G', '\u{1e20}'), ('I', '\u{012a}'),
            ('O', '\u{014c}'), ('U', '\u{016a}'), ('Y', '\u{0232}'),
        ],
    ),
    (Diacritic::ACUTE.union(Diacritic::MACRON), &[('E', '\u{1e16}'), ('O', '\u{1e52}')]),
    (Diacritic::GRAVE.union(Diacritic::MACRON), &[('E', '\u{1e14}'), ('O', '\u{1e50}')]),
    (Diacritic::MIDDLEDOT, &[('L', '\u{013f}')]),
    (Diacritic::MIDDLETILDE, &[('L', '\u{2c62}'), ('O', '\u{019f}')]),
    (
        Diacritic::OBLIQUESTROKE,
        &[
            ('G', '\u{a7a0}'), ('K', '\u{a7a2}'), ('N', '\u{a7a4}'), ('R', '\u{a7a6}'),
            ('S', '\u{a7a8}'),
        ],
    ),
    (
        Diacritic::OGONEK,
        &[
            ('A', '\u{0104}'), ('E', '\u{0118}'), ('I', '\u{012e}'), ('O', '\u{01ea}'),
            ('U', '\u{0172}'),
        ],
    ),
    (Diacritic::MACRON.union(Diacritic::OGONEK), &[('O', '\u{01ec}')]),
    (Diacritic::PALATALHOOK, &[('C', '\u{a7c4}'), ('Z', '\u{a7c6}')]),
    (Diacritic::RETROFLEXHOOK, &[('T', '\u{01ae}')]),
    (Diacritic::RINGABOVE, &[('A', '\u{00c5}'), ('U', '\u{016e}')]),
    (Diacritic::ACUTE.union(Diacritic::RINGABOVE), &[('A', '\u{01fa}')]),
    (Diacritic::RINGBELOW, &[('A', '\u{1e00}')]),
    (Diacritic::SHORTSTROKEOVERLAY, &[('D', '\u{a7c7}'), ('S', '\u{a7c9}')]),
    (Diacritic::SQUIRRELTAIL, &[('P', '\u{a754}')]),
    (
        Diacritic::STROKE,
        &[
            ('A', '\u{023a}'), ('B', '\u{0243}'), ('C', '\u{023b}'), ('D', '\u{0110}'),
            ('E', '\u{0246}'), ('F', '\u{a798}'), ('G', '\u{01e4}'), ('H', '\u{0126}'),
            ('I', '\u{0197}'), ('J', '\u{0248}'), ('K', '\u{a740}'), ('L', '\u{0141}'),
            ('O', '\u{00d8}'), ('P', '\u{2c63}'), ('R', '\u{024c}'), ('T', '\u{0166}'),
            ('U', '\u{a7b8}'), ('Y', '\u{024e}'), ('Z', '\u{01b5}'),
        ],
    ),
    (Diacritic::ACUTE.union(Diacritic::STROKE), &[('O', '\u{01fe}')]),
    (Diacritic::DIAGONALSTROKE.union(Diacritic::STROKE), &[('K', '\u{a744}')]),
    (Diacritic::STROKETHROUGHDESCENDER, &[('P', '\u{a750}'), ('Q', '\u{a756}')]),
    (Diacritic::SWASHTAIL, &[('S', '\u{2c7e}'), ('Z', '\u{2c7f}')]),
    (Diacritic::TAIL, &[('R', '\u{2c64}')]),
    (
        Diacritic::TILDE,
        &[
            ('A', '\u{00c3}'), ('E', '\u{1ebc}'), ('I', '\u{0128}'), ('N', '\u{00d1}'),
            ('O', '\u{00d5}'), ('U', '\u{0168}'), ('V', '\u{1e7c}'), ('Y', '\u{1ef8}'),
        ],
    ),
    (Diacritic::ACUTE.union(Diacritic::TILDE), &[('O', '\u{1e4c}'), ('U', '\u{1e78}')]),
    (Diacritic::DIAERESIS.union(Diacritic::TILDE), &[('O', '\u{1e4e}')]),
    (Diacritic::MACRON.union(Diacritic::TILDE), &[('O', '\u{022c}')]),
    (Diacritic::TILDEBELOW, &[('E', '\u{1e1a}'), ('I', '\u{1e2c}'), ('U', '\u{1e74}')]),
    (Diacritic::TOPBAR, &[('B', '\u{0182}'), ('D', '\u{018b}')]),
];
