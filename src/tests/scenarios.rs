//! Small hand-checked inputs.
use super::{dp, ALL};
use crate::{
    batch::{myers_16x8, myers_32x4, myers_64x2, myers_8x16},
    error::Error,
    input::BatchInput,
    kernel::scan,
    myers_128x1, myers_64x1, myers_anyx1,
};

/// Query, candidates, and their distances.
const CASES: &[(&str, &[&str], &[u32])] = &[
    ("hello", &["hello", "hello"], &[0, 0]),
    ("hello", &["hella", "helko"], &[1, 1]),
    ("cat", &["cart", "coat"], &[1, 1]),
    ("hello", &["hell", "hllo"], &[1, 1]),
    ("", &["", "abc"], &[0, 3]),
    ("a", &["a", "z"], &[0, 1]),
    (
        "abcdefghijklmnop",
        &["abcdefghijklmnop", "abcdefghijklmnop"],
        &[0, 0],
    ),
    (
        "abcdefghijklmnop",
        &["xbcdefghijklmnop", "abcdefghijklmnox"],
        &[1, 1],
    ),
    ("abc", &["xyz", "def"], &[3, 3]),
    ("abcd", &["abdc", "bacd", "acbd", "dcba"], &[2, 2, 2, 4]),
    ("test", &["t", "tests"], &[3, 1]),
    ("middle", &["xmiddle", "middlex"], &[1, 1]),
    ("aaa", &["aa", "aaaaaa"], &[1, 3]),
    ("alpha", &["alpha", "beta"], &[0, 4]),
    (
        "hello",
        &["hella", "helko", "hxllo", "aello", "hellp", "hello"],
        &[1, 1, 1, 1, 1, 0],
    ),
    ("", &["", "a", "ab", "abc"], &[0, 1, 2, 3]),
];

#[test]
fn cases_every_kernel() {
    for &(query, candidates, expected) in CASES {
        let candidates = candidates.iter().map(|c| c.as_bytes()).collect::<Vec<_>>();
        for kernel in ALL {
            if query.len() > kernel.max_query_len() {
                continue;
            }
            assert_eq!(
                scan(kernel, query.as_bytes(), &candidates).as_deref(),
                Ok(expected),
                "{kernel} {query:?} {candidates:?}"
            );
        }
        for (c, &d) in candidates.iter().zip(expected) {
            assert_eq!(dp(query.as_bytes(), c), d);
        }
    }
}

#[test]
fn hello_full_batch() {
    let input = BatchInput::new(b"hello", [b"hello" as &[u8]; 8]);
    assert_eq!(myers_16x8(&input), Ok([0; 8]));
    let input = BatchInput::new(b"hello", [b"hello" as &[u8]; 16]);
    assert_eq!(myers_8x16(&input), Ok([0; 16]));
}

#[test]
fn single_edits_in_lanes() {
    let input = BatchInput::new(
        b"hello",
        [b"hella" as &[u8], b"helko", b"hxllo", b"aello", b"hellp", b"hello", b"", b"hello"],
    );
    assert_eq!(myers_16x8(&input), Ok([1, 1, 1, 1, 1, 0, 5, 0]));
}

#[test]
fn empty_query_16x8() {
    let input = BatchInput::new(b"", [b"" as &[u8], b"a", b"ab", b"abc", b"", b"", b"", b""]);
    assert_eq!(myers_16x8(&input), Ok([0, 1, 2, 3, 0, 0, 0, 0]));
}

#[test]
fn transpositions_32x4() {
    let input = BatchInput::new(b"abcd", [b"abdc" as &[u8], b"bacd", b"acbd", b"dcba"]);
    assert_eq!(myers_32x4(&input), Ok([2, 2, 2, 4]));
}

/// Prefixes of one long candidate, read only up to each lane's own length.
#[test]
fn length_limited() {
    let b = b"bbbbbbbbbbbbbbbb";
    let input = BatchInput::new(b"aaaa", [&b[..1], &b[..8]]);
    assert_eq!(myers_64x2(&input), Ok([4, 8]));

    let input = BatchInput::new(b"aaaa", [&b[..1], &b[..2], &b[..4], &b[..8]]);
    assert_eq!(myers_32x4(&input), Ok([4, 4, 4, 8]));

    let prefixes = [1, 2, 4, 8, 16].map(|l| &b[..l]);
    assert_eq!(scan(crate::Kernel::Lanes8x16, b"aaaa", &prefixes), Ok(vec![4, 4, 4, 8, 16]));
}

#[test]
fn single_lane_kernels() {
    for f in [myers_64x1, myers_128x1, myers_anyx1] {
        assert_eq!(f(b"kitten", b"sitting"), Ok(3));
        assert_eq!(f(b"flaw", b"lawn"), Ok(2));
        assert_eq!(f(b"", b"abc"), Ok(3));
        assert_eq!(f(b"abc", b""), Ok(3));
        assert_eq!(f(b"", b""), Ok(0));
    }
}

#[test]
fn rejected_inputs() {
    let input = BatchInput::new(b"hello", [b"hello" as &[u8], b"HELLO"]);
    assert!(matches!(myers_64x2(&input), Err(Error::InvalidByte { .. })));
    let q = [b'a'; 65];
    assert_eq!(
        myers_64x2(&BatchInput::new(&q, [b"a" as &[u8]; 2])),
        Err(Error::QueryTooLong { len: 65, max: 64 })
    );
    assert_eq!(myers_anyx1(&q, &q), Ok(0));
    let long = vec![b'a'; 1 << 16];
    let mut c = [b"a" as &[u8]; 8];
    c[7] = &long;
    assert_eq!(
        myers_16x8(&BatchInput::new(b"a", c)),
        Err(Error::CandidateTooLong {
            lane: 7,
            len: 1 << 16,
            max: u16::MAX as usize
        })
    );
}
