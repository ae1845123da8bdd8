use penntree::model::{IndexedTree, IndexedTreeBuilder, Label, SimpleTree, SimpleTreeBuilder, TreeNormalizer};
use penntree::parser::{BufferedByteSource, IterTokenizer, ParsingErrorType, PennTokenizer};
use penntree::penn::{PennStyle, PennTreeReader, read_tree_str, read_trees_file, read_trees_str, to_penn};
use std::io::{self, Read};

const WSJ_SMALL: &str = "tests/fixtures/wsj_small.mrg";
const LEGACY_HEADER: &str = "tests/fixtures/legacy_header.mrg";
const TRUNCATED: &str = "tests/fixtures/truncated.mrg";

fn indexed_reader(input: &str) -> PennTreeReader<PennTokenizer<penntree::parser::InMemoryByteSource>, IndexedTreeBuilder> {
    PennTreeReader::new(PennTokenizer::for_str(input), IndexedTreeBuilder::new())
}

fn leaf_positions(tree: &IndexedTree) -> Vec<usize> {
    tree.leaves()
        .map(|leaf| leaf.label().and_then(Label::index).unwrap())
        .collect()
}

fn child_values(tree: &SimpleTree, index: usize) -> Vec<Option<&str>> {
    tree.children_of(index).map(|child| child.value()).collect()
}

// --- TESTS BASIC READING ---
#[test]
fn test_dog_runs() {
    let mut reader = indexed_reader("(S (NP (NN dog)) (VP (VB runs)))");
    let tree = reader.read_tree().unwrap().unwrap();
    assert!(tree.is_valid());

    // Root S with children NP, VP
    let root = tree.root();
    assert_eq!(root.value(), Some("S"));
    let children: Vec<_> = tree.children_of(root.index()).map(|c| c.value()).collect();
    assert_eq!(children, vec![Some("NP"), Some("VP")]);

    // Leaves dog (1), runs (2), with words set
    let leaves: Vec<_> = tree.leaves().map(|leaf| leaf.label().unwrap()).collect();
    assert_eq!(leaves.len(), 2);
    assert_eq!(leaves[0].value(), "dog");
    assert_eq!(leaves[0].index(), Some(1));
    assert_eq!(leaves[0].word(), Some("dog"));
    assert_eq!(leaves[1].value(), "runs");
    assert_eq!(leaves[1].index(), Some(2));
    assert_eq!(leaves[1].word(), Some("runs"));

    assert!(reader.read_tree().unwrap().is_none());
}

#[test]
fn test_one_tree_per_top_level_group() {
    let trees = read_trees_str("(A x) (B y)\n(C (D z) (E w))\n\n(F)").unwrap();
    assert_eq!(trees.len(), 4);

    let roots: Vec<_> = trees.iter().map(|t| t.root().value()).collect();
    assert_eq!(roots, vec![Some("A"), Some("B"), Some("C"), Some("F")]);
    assert_eq!(trees[2].yield_words(), vec!["z", "w"]);
    assert_eq!(trees[3].num_nodes(), 1);
}

#[test]
fn test_anonymous_root() {
    let tree = read_tree_str("( (S (NN x)) )").unwrap().unwrap();
    assert_eq!(tree.root().label(), None);
    assert_eq!(child_values(&tree, tree.root_index()), vec![Some("S")]);
    assert_eq!(tree.depth(), 3);
}

#[test]
fn test_brackets_glued_to_words() {
    let tree = read_tree_str("(S(NP(DT the)(NN cat))(VP(VBZ sits)))").unwrap().unwrap();
    assert_eq!(tree.yield_words(), vec!["the", "cat", "sits"]);
    assert_eq!(to_penn(&tree, PennStyle::Compact), "(S (NP (DT the) (NN cat)) (VP (VBZ sits)))");
}

#[test]
fn test_leaf_indices_increase_per_tree() {
    let source = PennTokenizer::from_file(WSJ_SMALL).unwrap();
    let reader = PennTreeReader::new(source, IndexedTreeBuilder::new());

    let mut leaf_counts = Vec::new();
    for tree in reader {
        let tree = tree.unwrap();
        let positions = leaf_positions(&tree);
        let expected: Vec<usize> = (1..=positions.len()).collect();
        assert_eq!(positions, expected);
        leaf_counts.push(positions.len());
    }
    assert_eq!(leaf_counts, vec![18, 13, 11]);
}

// --- TESTS ESCAPES ---
#[test]
fn test_unescaping_labels_and_terminals() {
    let tree = read_tree_str(r"(X\/Y (-NONE- \*T\*-1) (CD 1\/2) (SYM a\b))").unwrap().unwrap();
    assert_eq!(tree.root().value(), Some("X/Y"));
    assert_eq!(tree.yield_words(), vec!["*T*-1", "1/2", r"a\b"]);
}

#[test]
fn test_escapes_in_file() {
    let trees = read_trees_file(WSJ_SMALL).unwrap();
    let words = trees[2].yield_words();
    assert!(words.contains(&"1/2"));
    assert!(words.contains(&"*-1"));
    assert!(!words.iter().any(|w| w.contains('\\')));
}

// --- TESTS MALFORMED INPUT ---
#[test]
fn test_unmatched_close_bracket_is_skipped() {
    let mut reader = PennTreeReader::for_str("(A))(B)");

    let a = reader.read_tree().unwrap().unwrap();
    assert_eq!(a.root().value(), Some("A"));
    assert_eq!(a.root().num_children(), 0);

    let b = reader.read_tree().unwrap().unwrap();
    assert_eq!(b.root().value(), Some("B"));

    assert!(reader.read_tree().unwrap().is_none());
}

#[test]
fn test_token_outside_tree_is_skipped() {
    let trees = read_trees_str("junk (A b) more junk (C d)").unwrap();
    let roots: Vec<_> = trees.iter().map(|t| t.root().value()).collect();
    assert_eq!(roots, vec![Some("A"), Some("C")]);
}

#[test]
fn test_empty_brackets() {
    let mut reader = PennTreeReader::for_str("()");
    assert!(reader.read_tree().unwrap().is_none());

    let tree = read_tree_str("(A () b)").unwrap().unwrap();
    assert_eq!(tree.yield_words(), vec!["b"]);
    assert_eq!(tree.root().num_children(), 1);
}

#[test]
fn test_unexpected_end_of_input() {
    let mut reader = PennTreeReader::for_str("(A (B c");
    let err = reader.read_tree().unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::UnexpectedEndOfInput);
    assert_eq!(err.position(), 5);
    assert_eq!(err.context(), "(A (B");
    assert!(err.to_string().contains("Open brackets: (A (B"));

    // Stream is exhausted, no partial tree afterwards
    assert!(reader.read_tree().unwrap().is_none());
}

#[test]
fn test_open_bracket_at_end() {
    let mut reader = PennTreeReader::for_str("(A b) (");
    assert!(reader.read_tree().unwrap().is_some());
    let err = reader.read_tree().unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::UnexpectedEndOfInput);
}

#[test]
fn test_truncated_file() {
    let mut reader = PennTreeReader::for_file(TRUNCATED).unwrap();
    let first = reader.read_tree().unwrap().unwrap();
    assert_eq!(first.yield_words(), vec!["We", "left", "."]);

    let err = reader.read_tree().unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::UnexpectedEndOfInput);
    assert_eq!(err.context(), "( (S (VP");
}

// --- TESTS SENTINEL ---
#[test]
fn test_sentinel_repeats() {
    let mut reader = PennTreeReader::for_str("(A b)");
    assert!(reader.read_tree().unwrap().is_some());
    for _ in 0..3 {
        assert!(reader.read_tree().unwrap().is_none());
    }

    let mut empty = PennTreeReader::for_str("");
    assert!(empty.read_tree().unwrap().is_none());
    assert!(empty.read_tree().unwrap().is_none());
}

// --- TESTS LEGACY HEADER ---
#[test]
fn test_legacy_header_is_skipped() {
    let trees = read_trees_file(LEGACY_HEADER).unwrap();
    assert_eq!(trees.len(), 2);
    assert_eq!(trees[0].yield_words(), vec!["It", "was", "fine", "."]);
    assert_eq!(trees[1].yield_words(), vec!["Yes", "!"]);
}

#[test]
fn test_header_prefix_later_in_stream_is_not_a_header() {
    let trees = read_trees_str("(A b) *x*x*x (C d)").unwrap();
    assert_eq!(trees.len(), 2);
}

#[test]
fn test_header_without_trees() {
    let mut reader = PennTreeReader::for_str("*x*x*x only *x*x*x");
    assert!(reader.read_tree().unwrap().is_none());
}

// --- TESTS NORMALIZATION ---
/// Strips function tags, lowercases words, and removes an anonymous root.
struct StripFunctionTags;

impl TreeNormalizer<String> for StripFunctionTags {
    fn normalize_nonterminal(&self, label: Option<&str>) -> Option<String> {
        label.map(|label| match label.split_once('-') {
            Some((head, _)) if !head.is_empty() => head.to_string(),
            _ => label.to_string(),
        })
    }

    fn normalize_terminal(&self, token: &str) -> String {
        token.to_lowercase()
    }

    fn normalize_whole_tree(&self, tree: SimpleTree) -> SimpleTree {
        let root = tree.root();
        if root.label().is_none() && root.num_children() == 1 {
            tree.subtree(root.children()[0])
        } else {
            tree
        }
    }
}

#[test]
fn test_normalizer() {
    let mut reader = PennTreeReader::for_str(r"( (S (NP-SBJ-1 (NNP Dogs)) (VP (VBP run) (-NONE- \*T\*-1))) )")
        .with_normalizer(StripFunctionTags);
    let tree = reader.read_tree().unwrap().unwrap();

    assert!(tree.is_valid());
    assert_eq!(tree.root().value(), Some("S"));
    assert_eq!(child_values(&tree, tree.root_index()), vec![Some("NP"), Some("VP")]);
    assert_eq!(tree.yield_words(), vec!["dogs", "run", "*t*-1"]);
    assert_eq!(to_penn(&tree, PennStyle::Compact), "(S (NP (NNP dogs)) (VP (VBP run) (-NONE- *t*-1)))");
}

#[test]
fn test_leaf_indices_after_whole_tree_normalization() {
    /// Keeps only the first child of the root.
    struct FirstChildOnly;
    impl TreeNormalizer<penntree::model::IndexedWord> for FirstChildOnly {
        fn normalize_whole_tree(&self, tree: IndexedTree) -> IndexedTree {
            let first = tree.root().children()[0];
            tree.subtree(first)
        }
    }

    let mut reader = indexed_reader("(S (NP (DT the) (NN dog)) (VP (VBZ barks)))").with_normalizer(FirstChildOnly);
    let tree = reader.read_tree().unwrap().unwrap();
    assert_eq!(tree.root().value(), Some("NP"));
    assert_eq!(leaf_positions(&tree), vec![1, 2]);
}

// --- TESTS LAZY READING & LIFECYCLE ---
#[test]
fn test_iterator_stops_after_error() {
    let mut iter = PennTreeReader::for_str("(A b) (C d").into_iter();
    assert!(iter.next().unwrap().is_ok());
    assert!(iter.next().unwrap().is_err());
    assert!(iter.next().is_none());

    let mut reader = iter.into_reader();
    assert!(reader.read_tree().unwrap().is_none());
}

#[test]
fn test_read_all_and_close() {
    let mut reader = PennTreeReader::for_file(WSJ_SMALL).unwrap();
    let trees = reader.read_all().unwrap();
    assert_eq!(trees.len(), 3);
    reader.close();
}

#[test]
fn test_missing_file() {
    let result = PennTreeReader::for_file("tests/fixtures/does_not_exist.mrg");
    assert!(matches!(result.err().map(|e| e.kind().clone()), Some(ParsingErrorType::IoError(_))));
}

#[test]
fn test_pre_tokenized_input() {
    let tokens = ["(", "S", "(", "NN", "dog", ")", ")", "(", "X", "y", ")"].map(String::from);
    let reader = PennTreeReader::new(IterTokenizer::new(tokens), SimpleTreeBuilder::new());
    let trees: Vec<SimpleTree> = reader.into_iter().collect::<Result<_, _>>().unwrap();
    assert_eq!(trees.len(), 2);
    assert_eq!(trees[0].yield_words(), vec!["dog"]);
}

#[test]
fn test_file_modes_agree() {
    let buffered = read_trees_file(WSJ_SMALL).unwrap();
    let in_memory = PennTreeReader::new(PennTokenizer::from_file(WSJ_SMALL).unwrap(), SimpleTreeBuilder::new())
        .read_all()
        .unwrap();

    assert_eq!(buffered.len(), in_memory.len());
    for (a, b) in buffered.iter().zip(&in_memory) {
        assert_eq!(a.to_string(), b.to_string());
    }
}

// --- TESTS SOURCE FAILURES ---
/// Serves `data` in one read, then fails.
struct FailingReader {
    data: &'static [u8],
    served: bool,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.served {
            return Err(io::Error::other("device unplugged"));
        }
        self.served = true;
        let n = self.data.len().min(buf.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        Ok(n)
    }
}

fn failing_reader(data: &'static [u8]) -> PennTreeReader<PennTokenizer<BufferedByteSource<FailingReader>>, SimpleTreeBuilder> {
    let source = BufferedByteSource::from_reader(FailingReader { data, served: false });
    PennTreeReader::new(PennTokenizer::new(source), SimpleTreeBuilder::new())
}

#[test]
fn test_read_failure_between_trees() {
    let mut reader = failing_reader(b"(A b) (C d)");
    assert_eq!(reader.read_tree().unwrap().unwrap().root().value(), Some("A"));
    assert_eq!(reader.read_tree().unwrap().unwrap().root().value(), Some("C"));

    let err = reader.read_tree().unwrap_err();
    match err.kind() {
        ParsingErrorType::IoError(msg) => {
            assert!(msg.contains("device unplugged"));
            assert!(msg.contains("after byte 11"));
        }
        other => panic!("expected IoError, got {other:?}"),
    }
    assert_eq!(err.position(), 8);

    // Error is reported once, then the stream is done
    assert!(reader.read_tree().unwrap().is_none());
}

#[test]
fn test_read_failure_inside_tree() {
    let mut reader = failing_reader(b"(A (B c");
    let err = reader.read_tree().unwrap_err();
    assert!(matches!(err.kind(), ParsingErrorType::IoError(_)));
}

#[test]
fn test_read_failure_stops_iteration() {
    let trees: Vec<_> = failing_reader(b"(A b)").into_iter().collect();
    assert_eq!(trees.len(), 2);
    assert!(trees[0].is_ok());
    assert!(trees[1].is_err());
}
