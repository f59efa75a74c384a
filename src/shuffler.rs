// shuffle: randomly shuffle lines of text from an input file (shuffler)
// by Ian Kluft
// one of multiple programming language implementations of shuffle (C++, Go, Perl, Python and Rust)
// See https://github.com/ikluft/ikluft-tools/tree/master/shuffle
//
// Open Source licensing under terms of GNU General Public License version 3
// SPDX identifier: GPL-3.0-only
// https://opensource.org/licenses/GPL-3.0
// https://www.gnu.org/licenses/gpl-3.0.en.html

use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};

// generator for one run, seeded from the operating system's entropy source
// SmallRng is random enough, fast enough, minimal memory; not for cryptographic use
pub fn entropy_rng() -> SmallRng {
    SmallRng::from_entropy()
}

// shuffle in place with Fisher-Yates, every ordering equally likely
pub fn shuffle_lines<T, R: Rng + ?Sized>(lines: &mut [T], rng: &mut R) {
    lines.shuffle(rng);
}
