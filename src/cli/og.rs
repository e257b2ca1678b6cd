//! `folio og`: render a preview card without starting the server.

use anyhow::Result;

use super::args::OgArgs;
use super::common::write_output;
use crate::config::SiteConfig;
use crate::seo::{ContentType, PreviewCardRequest, PreviewImageRenderer};

/// Execute og command
pub fn run_og(args: &OgArgs, config: &SiteConfig) -> Result<()> {
    let html = PreviewImageRenderer::new(config).render(&card_request(args))?;
    write_output("og", args.output.as_deref(), &html)
}

fn card_request(args: &OgArgs) -> PreviewCardRequest {
    PreviewCardRequest {
        title: args.title.clone(),
        content_type: ContentType::parse(&args.kind),
        image_url: args
            .image
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        path: args.path.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn args(title: &str, kind: &str, image: Option<&str>) -> OgArgs {
        OgArgs {
            title: title.into(),
            kind: kind.into(),
            path: "/blogs/x".into(),
            image: image.map(str::to_string),
            output: None,
        }
    }

    #[test]
    fn test_card_request() {
        let request = card_request(&args("Hello", "study", Some("  ")));
        assert_eq!(request.content_type, ContentType::Study);
        assert!(request.image_url.is_none());
        assert_eq!(request.path, "/blogs/x");
    }

    #[test]
    fn test_writes_card_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_parse_config("");
        let mut og = args("Hello <Card>", "blog", None);
        og.output = Some(dir.path().join("card.html"));

        run_og(&og, &config).unwrap();
        let html = std::fs::read_to_string(dir.path().join("card.html")).unwrap();
        assert!(html.contains("Hello &lt;Card&gt;"));
        assert!(html.contains("Blog Post"));
    }

    #[test]
    fn test_invalid_image_fails() {
        let config = test_parse_config("");
        let og = args("Hello", "blog", Some("javascript:alert(1)"));
        assert!(run_og(&og, &config).is_err());
    }
}
