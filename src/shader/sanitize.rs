use std::sync::LazyLock;
use regex::Regex;

/// A triple-backtick fence. A language tag is only part of the fence when
/// nothing but the line break follows it; otherwise just the backticks go.
static FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)```(?:[A-Za-z0-9_+\-]*[ \t]*(?:\r?\n|$))?").unwrap()
});

/// Remove markdown code fences from model output and trim the result.
pub fn strip_code_fences(text: &str) -> String {
    let mut result = text.to_string();
    // Removing one fence can join backticks on either side into a new one.
    while FENCE.is_match(&result) {
        result = FENCE.replace_all(&result, "").into_owned();
    }
    result.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tagged_fence() {
        assert_eq!(strip_code_fences("```glsl\nvoid main(){}\n```"), "void main(){}");
    }

    #[test]
    fn test_strips_untagged_fence_and_prose_whitespace() {
        let raw = "\n\n```\nprecision mediump float;\nvoid main() {}\n```\n";
        assert_eq!(strip_code_fences(raw), "precision mediump float;\nvoid main() {}");
    }

    #[test]
    fn test_plain_source_untouched() {
        let src = "precision mediump float;\nvoid main() { gl_FragColor = vec4(1.0); }";
        assert_eq!(strip_code_fences(src), src);
    }

    #[test]
    fn test_multiple_blocks() {
        let raw = "```glsl\nfloat f() { return 1.0; }\n```\n```glsl\nvoid main() {}\n```";
        let out = strip_code_fences(raw);
        assert!(!out.contains("```"));
        assert!(out.contains("float f()"));
        assert!(out.contains("void main()"));
    }

    #[test]
    fn test_no_fence_survives_odd_backtick_runs() {
        for raw in ["````glsl\nx\n````", "``````", "`````glsl`", "``\n```\n`", "a ``` b ```` c"] {
            assert!(!strip_code_fences(raw).contains("```"), "fence left in {:?}", raw);
        }
    }

    #[test]
    fn test_single_line_fenced_source_keeps_code() {
        assert_eq!(strip_code_fences("```void main(){}```"), "void main(){}");
    }

    #[test]
    fn test_text_after_closing_fence_is_kept() {
        let raw = "```glsl\nvoid main(){}\n```Hope this helps";
        assert_eq!(strip_code_fences(raw), "void main(){}\nHope this helps");
    }

    #[test]
    fn test_tag_followed_by_spaces_then_newline() {
        assert_eq!(strip_code_fences("```glsl  \nvoid main(){}\n```"), "void main(){}");
    }

    #[test]
    fn test_windows_line_endings() {
        assert_eq!(strip_code_fences("```glsl\r\nvoid main(){}\r\n```"), "void main(){}");
    }
}
