// ============================================================================
// Hebrew Numeral State Machine
// Token classes, states and the state x token transition table
// ============================================================================

/// Numeral letters in U+05D0..=U+05EA with their class and value.
/// Final letter forms carry no value.
const LETTERS: [Option<(HebrewToken, i32)>; 27] = {
    use HebrewToken::*;
    [
        Some((Digit1, 1)),          // alef
        Some((Digit1, 2)),          // bet
        Some((Digit1, 3)),          // gimel
        Some((Digit1, 4)),          // dalet
        Some((Digit1, 5)),          // he
        Some((Digit6Or7, 6)),       // vav
        Some((Digit6Or7, 7)),       // zayin
        Some((Digit1, 8)),          // het
        Some((Digit9, 9)),          // tet
        Some((Digit10, 10)),        // yod
        None,                       // final kaf
        Some((Digit10, 20)),        // kaf
        Some((Digit10, 30)),        // lamed
        None,                       // final mem
        Some((Digit10, 40)),        // mem
        None,                       // final nun
        Some((Digit10, 50)),        // nun
        Some((Digit10, 60)),        // samekh
        Some((Digit10, 70)),        // ayin
        None,                       // final pe
        Some((Digit10, 80)),        // pe
        None,                       // final tsadi
        Some((Digit10, 90)),        // tsadi
        Some((Digit100, 100)),      // qof
        Some((Digit200Or300, 200)), // resh
        Some((Digit200Or300, 300)), // shin
        Some((Digit400, 400)),      // tav
    ]
};

pub const FIRST_LETTER: char = '\u{05D0}';
pub const LAST_LETTER: char = '\u{05EA}';

/// Input classes; the discriminant is the table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HebrewToken {
    Digit400 = 0,
    Digit200Or300 = 1,
    Digit100 = 2,
    /// 10 through 90
    Digit10 = 3,
    /// 1-5 and 8
    Digit1 = 4,
    Digit6Or7 = 5,
    /// Reserved column; no letter maps to it
    Digit7 = 6,
    Digit9 = 7,
    SingleQuote = 8,
    DoubleQuote = 9,
}

pub const TOKEN_COUNT: usize = 10;

/// Classify a character, returning its token and numeral value.
pub fn classify(ch: char) -> Option<(HebrewToken, i32)> {
    match ch {
        '\'' => Some((HebrewToken::SingleQuote, 0)),
        '"' => Some((HebrewToken::DoubleQuote, 0)),
        FIRST_LETTER..=LAST_LETTER => LETTERS[(ch as u32 - FIRST_LETTER as u32) as usize],
        _ => None,
    }
}

/// Parser states; the discriminant of a live state is the table row.
///
/// Names spell the letters seen so far: `S400` a 400, `X00` a hundreds
/// letter, `X0` a tens letter, `X` a units letter, `S9` a tet, `DQ` a
/// double quote.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HebrewState {
    Start = 0,
    S400 = 1,
    S400_400 = 2,
    S400_X00 = 3,
    S400_X0 = 4,
    X00_DQ = 5,
    S400_X00_X0 = 6,
    X0_DQ = 7,
    X = 8,
    X0 = 9,
    X00 = 10,
    S400_DQ = 11,
    S400_400_DQ = 12,
    S400_400_100 = 13,
    S9 = 14,
    X00_S9 = 15,
    S9_DQ = 16,
    /// Terminal: a complete numeral was read
    End = 17,
    /// Absorbing failure state
    Error = 18,
}

pub const LIVE_STATES: usize = 17;

const TABLE: [[HebrewState; TOKEN_COUNT]; LIVE_STATES] = {
    use HebrewState::*;
    const E: HebrewState = Error;
    [
        // 400       200/300    100           10-90        1-8  6/7  7    9       '    "
        [S400,       X00,       X00,          X0,          X,   X,   X,   S9,     E,   E],           // Start
        [S400_400,   S400_X00,  S400_X00,     S400_X0,     E,   E,   E,   X00_S9, End, S400_DQ],     // S400
        [E,          E,         S400_400_100, S400_X0,     E,   E,   E,   X00_S9, E,   S400_400_DQ], // S400_400
        [E,          E,         E,            S400_X00_X0, E,   E,   E,   X00_S9, E,   X00_DQ],      // S400_X00
        [E,          E,         E,            E,           E,   E,   E,   E,      E,   X0_DQ],       // S400_X0
        [E,          E,         E,            End,         End, End, End, End,    E,   E],           // X00_DQ
        [E,          E,         E,            E,           E,   E,   E,   E,      E,   X0_DQ],       // S400_X00_X0
        [E,          E,         E,            E,           End, End, End, End,    E,   E],           // X0_DQ
        [E,          E,         E,            E,           E,   E,   E,   E,      End, E],           // X
        [E,          E,         E,            E,           E,   E,   E,   E,      End, X0_DQ],       // X0
        [E,          E,         E,            S400_X0,     E,   E,   E,   X00_S9, End, X00_DQ],      // X00
        [End,        End,       End,          End,         End, End, End, End,    E,   E],           // S400_DQ
        [E,          E,         End,          End,         End, End, End, End,    E,   E],           // S400_400_DQ
        [E,          E,         E,            S400_X00_X0, E,   E,   E,   X00_S9, E,   X00_DQ],      // S400_400_100
        [E,          E,         E,            E,           E,   E,   E,   E,      End, S9_DQ],       // S9
        [E,          E,         E,            E,           E,   E,   E,   E,      E,   S9_DQ],       // X00_S9
        [E,          E,         E,            E,           E,   End, End, E,      E,   E],           // S9_DQ
    ]
};

impl HebrewState {
    /// Next state on `token`. `End` and `Error` absorb every token.
    pub fn next(self, token: HebrewToken) -> HebrewState {
        match self {
            HebrewState::End | HebrewState::Error => HebrewState::Error,
            live => TABLE[live as usize][token as usize],
        }
    }
}

/// Outcome of feeding one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HebrewStep {
    Continue,
    Complete,
    Invalid,
    NotARecognizedDigit,
}

/// Per-scan state: where the machine is and the running value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HebrewParsingContext {
    state: HebrewState,
    result: i32,
}

impl HebrewParsingContext {
    pub fn new() -> Self {
        Self {
            state: HebrewState::Start,
            result: 0,
        }
    }

    /// Feed one character.
    ///
    /// An unrecognized character leaves the context untouched. A recognized
    /// letter adds its value even when the transition fails.
    pub fn advance(&mut self, ch: char) -> HebrewStep {
        let Some((token, value)) = classify(ch) else {
            return HebrewStep::NotARecognizedDigit;
        };
        self.result = self.result.saturating_add(value);
        self.state = self.state.next(token);
        match self.state {
            HebrewState::Error => HebrewStep::Invalid,
            HebrewState::End => HebrewStep::Complete,
            _ => HebrewStep::Continue,
        }
    }

    #[inline]
    pub fn state(&self) -> HebrewState {
        self.state
    }

    #[inline]
    pub fn result(&self) -> i32 {
        self.result
    }
}

impl Default for HebrewParsingContext {
    fn default() -> Self {
        Self::new()
    }
}
