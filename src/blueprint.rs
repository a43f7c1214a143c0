use crate::content;
use crate::tree::Node;

/// The one skeleton this tool knows how to produce: a `scss/` root with the
/// usual partial directories, each file backed by a preset payload from
/// [`content`].
pub fn skeleton() -> Node {
    Node::dir(
        "scss",
        vec![
            Node::file("index.scss", content::INDEX),
            Node::dir(
                "abstracts",
                vec![
                    Node::file("_variables.scss", content::abstracts::VARIABLES),
                    Node::file("_mixins.scss", content::abstracts::MIXINS),
                ],
            ),
            Node::dir(
                "base",
                vec![
                    Node::file("_reset.scss", content::base::RESET),
                    Node::file("_fonts.scss", content::base::FONTS),
                    Node::file("_tags.scss", content::base::TAGS),
                ],
            ),
            Node::dir(
                "components",
                vec![Node::file("_button.scss", content::components::BUTTON)],
            ),
            Node::dir(
                "layout",
                vec![
                    Node::file("_header.scss", content::layout::HEADER),
                    Node::file("_footer.scss", content::layout::FOOTER),
                ],
            ),
        ],
    )
}
