//! The basic bitpacked step from Myers'99.
use crate::word::Word;

/// One column step of Myers '99 bitpacking based algorithm. Terminology is as
/// in the paper.
///
/// The query runs vertically along the bits of the word; each call consumes
/// one character of the candidate. `vp` and `vn` bit-encode whether the
/// *v*ertical differences of the current column are +1 (*p*) or -1 (*n*):
///
/// vp[i] = [D(i+1, j) - D(i, j) ==  1]
/// vn[i] = [D(i+1, j) - D(i, j) == -1]
///
/// They are updated in place to column `j+1`. Returns `(hp, hn)`, the
/// horizontal differences D(i, j+1) - D(i, j) == +1 resp. -1, where bit `i`
/// refers to row `i+1`. The top row always has horizontal difference +1,
/// which is the `| 1` shifted into `y`.
///
/// 15 operations, excluding the lookup of `eq`.
#[inline(always)]
pub fn compute_block<W: Word>(vp: &mut W, vn: &mut W, eq: W) -> (W, W) {
    let x = eq | *vn;
    // The add here contains the 'folding' magic that makes this algorithm
    // 'non-local' and prevents simple SIMDification. See Myers'99 for details.
    let d0 = ((*vp & x).wrapping_add(vp) ^ *vp) | x;
    let hn = *vp & d0;
    let hp = *vn | !(*vp | d0);
    let y = (hp << 1) | W::one();
    *vn = y & d0;
    *vp = (hn << 1) | !(y | d0);
    (hp, hn)
}

/// The same step for `N` independent lanes advancing in lock-step.
///
/// This loop is plain enough for the compiler to turn into SIMD instructions
/// over the full `[W; N]` arrays.
#[inline(always)]
pub fn compute_block_lanes<W: Word, const N: usize>(
    vp: &mut [W; N],
    vn: &mut [W; N],
    eq: &[W; N],
    hp: &mut [W; N],
    hn: &mut [W; N],
) {
    for k in 0..N {
        (hp[k], hn[k]) = compute_block(&mut vp[k], &mut vn[k], eq[k]);
    }
}

/// Whether bit `last` of `(hp, hn)` raises (`.0`) or lowers (`.1`) the score.
/// At most one of the two is set.
#[inline(always)]
pub fn delta<W: Word>(hp: W, hn: W, last: W) -> (bool, bool) {
    let inc = hp & last != W::zero();
    let dec = !inc && hn & last != W::zero();
    (inc, dec)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bottom row of the DP table of `a` (vertical) against `b` (horizontal),
    /// recomputed with the automaton on a `u64`.
    fn bottom_row(a: &[u8], b: &[u8]) -> Vec<i64> {
        let mut eqs = [0u64; 256];
        for (i, &c) in a.iter().enumerate() {
            eqs[c as usize] |= 1 << i;
        }
        let last = 1u64 << (a.len() - 1);
        let (mut vp, mut vn) = (u64::MAX, 0);
        let mut d = a.len() as i64;
        let mut row = vec![d];
        for &c in b {
            let (hp, hn) = compute_block(&mut vp, &mut vn, eqs[c as usize]);
            match delta(hp, hn, last) {
                (true, _) => d += 1,
                (_, true) => d -= 1,
                _ => {}
            }
            row.push(d);
        }
        row
    }

    #[test]
    fn kitten_sitting() {
        // D(kitten, sitting[..j]) for j = 0..=7.
        assert_eq!(bottom_row(b"kitten", b"sitting"), vec![6, 6, 5, 4, 3, 3, 2, 3]);
    }

    #[test]
    fn lanes_match_single() {
        let mut vp = [u8::MAX; 3];
        let mut vn = [0u8; 3];
        let eqs = [[0b0001u8, 0b0110, 0], [0b1000, 0b0001, 0b1111]];
        let (mut svp, mut svn) = (vp, vn);
        let (mut hp, mut hn) = ([0; 3], [0; 3]);
        for eq in eqs {
            compute_block_lanes(&mut vp, &mut vn, &eq, &mut hp, &mut hn);
            for k in 0..3 {
                let (shp, shn) = compute_block(&mut svp[k], &mut svn[k], eq[k]);
                assert_eq!((hp[k], hn[k]), (shp, shn));
            }
        }
        assert_eq!((vp, vn), (svp, svn));
    }
}
