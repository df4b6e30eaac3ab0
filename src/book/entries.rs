//! Curated opening lines
//!
//! Keys are normalized FEN (placement, side to move, castling rights).
//! A candidate listed several times is proportionally more likely to be
//! picked.

pub(super) const STANDARD_ENTRIES: &[(&str, &[&str])] = &[
    // 1. White
    (
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq",
        &[
            "e4", "e4", "e4", "e4", // King's Pawn
            "d4", "d4", "d4", // Queen's Pawn
            "Nf3", "Nf3", // Reti / Zukertort
            "c4", // English
        ],
    ),
    // 1... Black, after 1.e4
    (
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq",
        &[
            "e5", "e5", "e5", // Open Game
            "c5", "c5", "c5", // Sicilian
            "e6", "e6", // French
            "c6", // Caro-Kann
            "d5", // Scandinavian
            "d6", // Pirc
            "Nf6", // Alekhine
        ],
    ),
    // after 1.d4
    (
        "rnbqkbnr/pppppppp/8/8/3P4/8/PPP1PPPP/RNBQKBNR b KQkq",
        &[
            "d5", "d5", "d5", // Closed Game
            "Nf6", "Nf6", // Indian Defences
            "f5", // Dutch
            "e6",
        ],
    ),
    // after 1.Nf3
    (
        "rnbqkbnr/pppppppp/8/8/8/5N2/PPPPPPPP/RNBQKB1R b KQkq",
        &["d5", "Nf6", "c5", "e6", "g6"],
    ),
    // after 1.c4
    (
        "rnbqkbnr/pppppppp/8/8/2P5/8/PP1PPPPP/RNBQKBNR b KQkq",
        &["e5", "c5", "Nf6", "e6"],
    ),
    // 2. White, after 1.e4 e5
    (
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq",
        &[
            "Nf3", "Nf3", "Nf3", // King's Knight
            "Nc3", // Vienna
            "f4",  // King's Gambit
            "Bc4", // Bishop's Opening
        ],
    ),
    // after 1.e4 c5
    (
        "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq",
        &[
            "Nf3", "Nf3", "Nf3", // Open Sicilian
            "Nc3", // Closed Sicilian
            "c3",  // Alapin
            "d4",  // Smith-Morra
        ],
    ),
    // after 1.e4 e6
    (
        "rnbqkbnr/pppp1ppp/4p3/8/4P3/8/PPPP1PPP/RNBQKBNR w KQkq",
        &[
            "d4", "d4", "d4", //
            "d3", // King's Indian Attack
        ],
    ),
    // after 1.d4 d5
    (
        "rnbqkbnr/ppp1pppp/8/3p4/3P4/8/PPP1PPPP/RNBQKBNR w KQkq",
        &[
            "c4", "c4", "c4", // Queen's Gambit
            "Nf3", //
            "Bf4", // London
        ],
    ),
    // after 1.d4 Nf6
    (
        "rnbqkb1r/pppppppp/5n2/8/3P4/8/PPP1PPPP/RNBQKBNR w KQkq",
        &["c4", "c4", "c4", "Nf3", "Bg5"],
    ),
    // 2... Black, after 1.e4 e5 2.Nf3
    (
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq",
        &[
            "Nc6", "Nc6", "Nc6", "Nc6", // Main line
            "d6", "d6", // Philidor
            "Nf6", // Petrov
            "f6",  // Damiano
        ],
    ),
    // after 1.d4 d5 2.c4
    (
        "rnbqkbnr/ppp1pppp/8/3p4/2PP4/8/PP2PPPP/RNBQKBNR b KQkq",
        &[
            "e6", "e6", // Declined
            "c6", // Slav
            "dxc4", // Accepted
        ],
    ),
    // 3. White, after 1.e4 e6 2.d4 d5
    (
        "rnbqkbnr/ppp2ppp/4p3/3p4/3PP3/8/PPP2PPP/RNBQKBNR w KQkq",
        &[
            "e5",   // Advance
            "Nc3",  // Classical
            "Nd2",  // Tarrasch
            "exd5", // Exchange
        ],
    ),
];
