#![allow(missing_docs)]

use divan::{Bencher, black_box, counter::BytesCount};
use wordslicer::tokenize::{PatternTokenizer, TokenizerOptions};

fn main() {
    divan::main();
}

static SAMPLE: &str = "The quick brown fox jumps over the lazy dog. It's 3.14 miles away!\n\n\
                       Second paragraph: \"quoted\", (parenthesized) and caf\u{e9} na\u{ef}ve text.\n";

fn corpus() -> String {
    SAMPLE.repeat(200)
}

fn bench_tokenizer(
    bencher: Bencher,
    tokenizer: PatternTokenizer,
) {
    let text = corpus();
    bencher
        .counter(BytesCount::of_str(&text))
        .bench(|| black_box(tokenizer.tokenize(black_box(&text))));
}

#[divan::bench]
fn whitespace(bencher: Bencher) {
    bench_tokenizer(bencher, PatternTokenizer::whitespace());
}

#[divan::bench]
fn blankline(bencher: Bencher) {
    bench_tokenizer(bencher, PatternTokenizer::blankline());
}

#[divan::bench]
fn word_punct(bencher: Bencher) {
    bench_tokenizer(bencher, PatternTokenizer::word_punct());
}

#[divan::bench]
fn fancy_lookahead(bencher: Bencher) {
    bench_tokenizer(
        bencher,
        PatternTokenizer::new(r"\w+(?=[\s.,!])").unwrap(),
    );
}

#[divan::bench]
fn grouped_gaps(bencher: Bencher) {
    bench_tokenizer(
        bencher,
        TokenizerOptions::for_gaps().build(r"(\s|[,.!])+").unwrap(),
    );
}
