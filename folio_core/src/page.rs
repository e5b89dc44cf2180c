// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The assembled portfolio page.
//!
//! [`PortfolioPage`] is the static content: profile, ordered sections and
//! their bodies. It renders the whole page once, and the two navigation
//! containers on their own whenever the active section changes.
//! [`PageState`] is the dynamic part: the scroll-spy and the observable
//! active section the navigation reads.

use alloc::borrow::Cow;
use alloc::format;
use alloc::vec::Vec;

use crate::carousel::{self, Carousel, CarouselConfig};
use crate::cn;
use crate::error::ConfigError;
use crate::scroll_spy::{Extent, ScrollSpy, ScrollSpyConfig};
use crate::section::{self, Section, SectionId};
use crate::site::SiteConfig;
use crate::state::Observable;
use crate::time::HostTime;
use crate::trace::{NavigateEvent, Tracer};
use crate::ui::{
    Button, ButtonVariant, badge, card, card_content, card_description, card_header, card_title,
    image,
};
use crate::view::{Element, Node};

/// `id` of the desktop navigation container.
pub const DESKTOP_NAV_ID: &str = "desktop-nav";
/// `id` of the mobile navigation container.
pub const MOBILE_NAV_ID: &str = "mobile-nav";
/// Attribute on every navigation button naming its target section.
pub const NAV_SECTION_ATTR: &str = "data-section";

const DESKTOP_ITEM: &str = "lg:block text-left transition-colors duration-200";
const DESKTOP_ACTIVE: &str = "text-foreground font-medium";
const DESKTOP_INACTIVE: &str = "text-muted-foreground hover:text-foreground";

const MOBILE_ITEM: &str = "px-3 py-2 rounded-md text-sm transition-colors duration-200";
const MOBILE_ACTIVE: &str = "bg-accent text-accent-foreground font-medium";
const MOBILE_INACTIVE: &str = "text-muted-foreground hover:text-foreground hover:bg-accent/50";

const FROSTED: &str = "bg-background/95 backdrop-blur supports-[backdrop-filter]:bg-background/60";
const MUTED_PARAGRAPH: &str = "text-muted-foreground leading-relaxed";
const TAG_ROW: &str = "flex flex-wrap gap-2";

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

/// Sidebar heading and owner name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    /// Sidebar heading, e.g. "Portfolio".
    pub heading: Cow<'static, str>,
    /// Owner name shown under the heading.
    pub name: Cow<'static, str>,
}

/// An image reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Picture {
    /// Asset path, resolved against the site base.
    pub src: Cow<'static, str>,
    /// Alt text.
    pub alt: Cow<'static, str>,
}

/// Body of the about section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AboutContent {
    /// Portrait shown at the top of the intro card.
    pub portrait: Option<Picture>,
    /// Intro paragraph.
    pub intro: Cow<'static, str>,
    /// Skill keywords.
    pub skills: Vec<Cow<'static, str>>,
    /// Contact lines (email, phone, city).
    pub contact: Vec<Cow<'static, str>>,
}

/// An outbound link rendered as a button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectLink {
    /// Button label.
    pub label: Cow<'static, str>,
    /// Target URL.
    pub href: Cow<'static, str>,
    /// Button style.
    pub variant: ButtonVariant,
}

impl ProjectLink {
    /// A primary "View Live" link.
    #[must_use]
    pub fn live(href: impl Into<Cow<'static, str>>) -> Self {
        Self {
            label: Cow::Borrowed("View Live"),
            href: href.into(),
            variant: ButtonVariant::Default,
        }
    }

    /// An outline "View Code" link.
    #[must_use]
    pub fn code(href: impl Into<Cow<'static, str>>) -> Self {
        Self {
            label: Cow::Borrowed("View Code"),
            href: href.into(),
            variant: ButtonVariant::Outline,
        }
    }
}

/// Body of a project section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectContent {
    /// Optional card title and subtitle.
    pub headline: Option<(Cow<'static, str>, Cow<'static, str>)>,
    /// Description paragraph.
    pub description: Cow<'static, str>,
    /// Image gallery.
    pub gallery: CarouselConfig,
    /// Keyword badges.
    pub tags: Vec<Cow<'static, str>>,
    /// Link buttons; none renders no button row.
    pub links: Vec<ProjectLink>,
}

/// What a section shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SectionBody {
    /// Portrait, intro, skills and contact.
    About(AboutContent),
    /// Gallery, description, tags and links.
    Project(ProjectContent),
}

// ---------------------------------------------------------------------------
// PortfolioPage
// ---------------------------------------------------------------------------

/// The page's static content and its renderers.
#[derive(Clone, Debug)]
pub struct PortfolioPage {
    profile: Profile,
    site: SiteConfig,
    sections: Vec<Section>,
    bodies: Vec<SectionBody>,
}

impl PortfolioPage {
    /// Validates the sections and every gallery.
    pub fn new(
        profile: Profile,
        site: SiteConfig,
        entries: Vec<(Section, SectionBody)>,
    ) -> Result<Self, ConfigError> {
        let (sections, bodies): (Vec<_>, Vec<_>) = entries.into_iter().unzip();
        section::validate(&sections)?;
        for body in &bodies {
            if let SectionBody::Project(p) = body {
                p.gallery.validate()?;
            }
        }
        Ok(Self {
            profile,
            site,
            sections,
            bodies,
        })
    }

    /// Sections in page order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Looks up a section by id.
    #[must_use]
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| *s.id() == *id)
    }

    /// The site configuration.
    #[must_use]
    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// Project galleries with the section that holds them. The gallery's
    /// carousel root is labelled with the section id.
    pub fn galleries(&self) -> impl Iterator<Item = (&SectionId, &CarouselConfig)> {
        self.sections
            .iter()
            .zip(&self.bodies)
            .filter_map(|(s, b)| match b {
                SectionBody::Project(p) => Some((s.id(), &p.gallery)),
                SectionBody::About(_) => None,
            })
    }

    /// A fresh [`PageState`] starting on the first section.
    pub fn state(&self, config: ScrollSpyConfig) -> Result<PageState, ConfigError> {
        PageState::new(&self.sections, config)
    }

    /// Renders the whole page with `active` highlighted.
    #[must_use]
    pub fn render(&self, active: &SectionId) -> Element {
        let mobile = Element::new("div")
            .class(cn!(
                "lg:hidden fixed top-0 left-0 right-0 z-50 border-b",
                FROSTED
            ))
            .child(
                Element::new("div")
                    .class("flex items-center justify-between p-4")
                    .child(self.render_mobile_nav(active)),
            );

        let sidebar = Element::new("div")
            .class(cn!(
                "hidden lg:block fixed left-0 top-0 h-screen w-64 border-r",
                FROSTED
            ))
            .child(
                Element::new("div")
                    .class("flex flex-col p-6 space-y-4")
                    .child(
                        Element::new("div")
                            .class("mb-8")
                            .child(
                                Element::new("h1")
                                    .class("text-2xl font-bold")
                                    .child(&*self.profile.heading),
                            )
                            .child(
                                Element::new("p")
                                    .class("text-muted-foreground")
                                    .child(&*self.profile.name),
                            ),
                    )
                    .child(self.render_desktop_nav(active)),
            );

        let main = Element::new("div").class("flex-1 lg:ml-64").child(
            Element::new("div")
                .class("pt-20 lg:pt-0 px-4 lg:px-8")
                .children_from(
                    self.sections
                        .iter()
                        .zip(&self.bodies)
                        .map(|(s, b)| self.render_section(s, b)),
                ),
        );

        Element::new("div")
            .class("min-h-screen bg-background")
            .child(mobile)
            .child(Element::new("div").class("flex").child(sidebar).child(main))
    }

    /// The desktop sidebar navigation list.
    #[must_use]
    pub fn render_desktop_nav(&self, active: &SectionId) -> Element {
        Element::new("nav")
            .attr_set("id", DESKTOP_NAV_ID)
            .class("space-y-3")
            .children_from(self.sections.iter().map(|s| {
                let is_active = s.id() == active;
                nav_button(s)
                    .class(cn!(
                        DESKTOP_ITEM,
                        if is_active { DESKTOP_ACTIVE } else { DESKTOP_INACTIVE }
                    ))
                    .child(number_span(s, "font-mono"))
                    .child(format!(" {}", s.title()))
            }))
    }

    /// The mobile bar navigation row. Inactive items show only their number.
    #[must_use]
    pub fn render_mobile_nav(&self, active: &SectionId) -> Element {
        Element::new("div")
            .attr_set("id", MOBILE_NAV_ID)
            .class("flex items-center space-x-2 overflow-x-auto")
            .children_from(self.sections.iter().map(|s| {
                let is_active = s.id() == active;
                let item = nav_button(s)
                    .class(cn!(
                        MOBILE_ITEM,
                        if is_active { MOBILE_ACTIVE } else { MOBILE_INACTIVE }
                    ))
                    .child(number_span(s, "font-mono"));
                if is_active {
                    item.child(Element::new("span").class("ml-1").child(s.title()))
                } else {
                    item
                }
            }))
    }

    fn render_section(&self, section: &Section, body: &SectionBody) -> Element {
        let heading = Element::new("div").class("mb-8").child(
            Element::new("h2")
                .class("text-4xl lg:text-6xl font-bold mb-4")
                .child(number_span(section, "font-mono text-muted-foreground"))
                .child(format!(" {}", section.title())),
        );
        let inner = Element::new("div")
            .class("max-w-4xl mx-auto")
            .child(heading);
        let inner = match body {
            SectionBody::About(about) => self.render_about(inner, about),
            SectionBody::Project(project) => self.render_project(inner, section.id(), project),
        };
        Element::new("section")
            .attr_set("id", section.id().as_str())
            .class("min-h-screen py-12 lg:py-20")
            .child(inner)
    }

    fn render_about(&self, inner: Element, about: &AboutContent) -> Element {
        let mut header = card_header();
        if let Some(portrait) = &about.portrait {
            header = header.child(image(self.site.asset_url(&portrait.src), &*portrait.alt));
        }
        let intro = card()
            .class("mb-8")
            .child(header)
            .child(
                card_content().child(
                    Element::new("p")
                        .class(MUTED_PARAGRAPH)
                        .child(&*about.intro),
                ),
            );

        let skills = card()
            .child(card_header().child(card_title().child("Skills")))
            .child(
                card_content().child(
                    Element::new("div")
                        .class(TAG_ROW)
                        .children_from(about.skills.iter().map(|s| badge(&**s))),
                ),
            );

        let contact = card()
            .child(card_header().child(card_title().child("Contact")))
            .child(
                card_content().child(
                    Element::new("div")
                        .class("space-y-2 text-muted-foreground")
                        .children_from(
                            about
                                .contact
                                .iter()
                                .map(|line| Element::new("p").child(&**line)),
                        ),
                ),
            );

        inner.child(intro).child(
            Element::new("div")
                .class("grid md:grid-cols-2 gap-6")
                .child(skills)
                .child(contact),
        )
    }

    fn render_project(&self, inner: Element, id: &SectionId, project: &ProjectContent) -> Element {
        let mut body = card();
        if let Some((title, subtitle)) = &project.headline {
            body = body.child(
                card_header()
                    .child(card_title().child(&**title))
                    .child(card_description().child(&**subtitle)),
            );
        }

        let mut content = card_content();
        // Validated in `new`.
        if let Ok(gallery) = Carousel::new(project.gallery.clone()) {
            content = content.child(
                Element::new("div")
                    .class("aspect-video bg-muted rounded-lg mb-6 flex items-center justify-center")
                    .child(carousel::view(&gallery, &self.site, id.as_str())),
            );
        }
        content = content
            .child(
                Element::new("p")
                    .class(cn!(MUTED_PARAGRAPH, "mb-6"))
                    .child(&*project.description),
            )
            .child(
                Element::new("div")
                    .class(cn!(TAG_ROW, "mb-6"))
                    .children_from(project.tags.iter().map(|t| badge(&**t))),
            );
        if !project.links.is_empty() {
            content = content.child(Element::new("div").class("flex gap-4").children_from(
                project.links.iter().map(|link| {
                    Element::new("a")
                        .attr_set("href", &*link.href)
                        .attr_set("target", "_blank")
                        .attr_set("rel", "noopener noreferrer")
                        .child(Button::new().variant(link.variant).child(&*link.label))
                }),
            ));
        }

        inner.child(body.child(content))
    }
}

fn nav_button(section: &Section) -> Element {
    Element::new("button")
        .attr_set("type", "button")
        .attr_set(NAV_SECTION_ATTR, section.id().as_str())
}

fn number_span(section: &Section, class: &'static str) -> Node {
    Element::new("span")
        .class(class)
        .child(format!("{}.", section.number()))
        .into_node()
}

// ---------------------------------------------------------------------------
// PageState
// ---------------------------------------------------------------------------

/// Scroll-spy plus the active section it publishes.
#[derive(Debug)]
pub struct PageState {
    spy: ScrollSpy,
    active: Observable<SectionId>,
}

impl PageState {
    /// Starts with the first section active.
    pub fn new(sections: &[Section], config: ScrollSpyConfig) -> Result<Self, ConfigError> {
        let spy = ScrollSpy::new(sections, config)?;
        let active = Observable::new(spy.active().clone());
        Ok(Self { spy, active })
    }

    /// The active section id.
    #[must_use]
    pub fn active(&self) -> &SectionId {
        self.active.get()
    }

    /// The observable active section, for subscribing redraws.
    pub fn active_mut(&mut self) -> &mut Observable<SectionId> {
        &mut self.active
    }

    /// Feeds one scroll event. Returns `true` when the active section
    /// changed; subscribers have been notified by then.
    pub fn on_scroll(
        &mut self,
        scroll_y: f64,
        layout: impl Fn(&SectionId) -> Option<Extent>,
        now: HostTime,
        tracer: &mut Tracer<'_>,
    ) -> bool {
        match self.spy.recompute_traced(scroll_y, layout, now, tracer) {
            Some(id) => {
                let id = id.clone();
                self.active.set(id)
            }
            None => false,
        }
    }

    /// Records a navigation click. The active section is left alone; the
    /// scroll that follows updates it.
    pub fn on_navigate(&self, target: &str, found: bool, now: HostTime, tracer: &mut Tracer<'_>) {
        tracer.navigate(&NavigateEvent {
            at: now,
            target,
            found,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::string::String;
    use alloc::vec;
    use core::cell::RefCell;

    use crate::backend::{HtmlPresenter, Presenter};

    fn page() -> PortfolioPage {
        PortfolioPage::new(
            Profile {
                heading: "Portfolio".into(),
                name: "Nora Julianna".into(),
            },
            SiteConfig::under("/nori-portfolio"),
            vec![
                (
                    Section::new(0, "about", "About"),
                    SectionBody::About(AboutContent {
                        portrait: Some(Picture {
                            src: "images/portrait.jpg".into(),
                            alt: "Portrait".into(),
                        }),
                        intro: "ars poetica".into(),
                        skills: vec!["street photography".into(), "brutalist".into()],
                        contact: vec!["your.email@example.com".into(), "Budapest, HU".into()],
                    }),
                ),
                (
                    Section::new(1, "project-a", "ÆLTER ÆGO"),
                    SectionBody::Project(ProjectContent {
                        headline: None,
                        description: "short description".into(),
                        gallery: CarouselConfig::new("images/alterego/alterego{index}.{ext}", 3),
                        tags: vec!["key word".into()],
                        links: vec![],
                    }),
                ),
                (
                    Section::new(2, "project-b", "Tour de LFW"),
                    SectionBody::Project(ProjectContent {
                        headline: Some(("Runway".into(), "London Fashion Week".into())),
                        description: "xxx".into(),
                        gallery: CarouselConfig::new("images/lfw/tour_de_LFW_{index}.{ext}", 2)
                            .with_extension("jpeg"),
                        tags: vec![],
                        links: vec![
                            ProjectLink::live("https://example.com"),
                            ProjectLink::code("https://example.com/src"),
                        ],
                    }),
                ),
            ],
        )
        .unwrap()
    }

    fn nav_classes(nav: &Element) -> Vec<(String, String)> {
        nav.children()
            .iter()
            .filter_map(Node::as_element)
            .map(|b| {
                (
                    String::from(b.attr(NAV_SECTION_ATTR).unwrap()),
                    String::from(b.class_name()),
                )
            })
            .collect()
    }

    #[test]
    fn desktop_nav_highlights_active_only() {
        let p = page();
        let nav = p.render_desktop_nav(&SectionId::from("project-a"));
        assert_eq!(nav.attr("id"), Some(DESKTOP_NAV_ID));
        for (id, class) in nav_classes(&nav) {
            let expected = if id == "project-a" {
                DESKTOP_ACTIVE
            } else {
                DESKTOP_INACTIVE
            };
            assert!(class.ends_with(expected), "{id}: {class}");
            assert!(class.starts_with(DESKTOP_ITEM));
        }
        assert_eq!(
            Node::from(nav.clone()).text_content(),
            "00. About01. ÆLTER ÆGO02. Tour de LFW"
        );
    }

    #[test]
    fn mobile_nav_shows_title_only_when_active() {
        let p = page();
        let nav = p.render_mobile_nav(&SectionId::from("about"));
        assert_eq!(nav.attr("id"), Some(MOBILE_NAV_ID));
        assert_eq!(Node::from(nav.clone()).text_content(), "00.About01.02.");
        let classes = nav_classes(&nav);
        assert!(classes[0].1.ends_with(MOBILE_ACTIVE));
        assert!(classes[1].1.ends_with(MOBILE_INACTIVE));
    }

    #[test]
    fn sections_have_ids_and_numbered_headings() {
        let root = Node::from(page().render(&SectionId::from("about")));
        let about = root.find_by_id("about").unwrap();
        assert_eq!(about.tag(), "section");
        let h2 = Node::from(about.clone());
        let h2 = h2.find(&|e| e.tag() == "h2").unwrap();
        assert_eq!(Node::from(h2.clone()).text_content(), "00. About");
        assert!(root.find_by_id("project-b").is_some());
    }

    #[test]
    fn about_section_content() {
        let root = Node::from(page().render(&SectionId::from("about")));
        let about = Node::from(root.find_by_id("about").unwrap().clone());
        let portrait = about.find(&|e| e.tag() == "img").unwrap();
        assert_eq!(portrait.attr("src"), Some("/nori-portfolio/images/portrait.jpg"));
        let text = about.text_content();
        assert!(text.contains("ars poetica"));
        assert!(text.contains("street photography"));
        assert!(text.contains("Budapest, HU"));
    }

    #[test]
    fn project_gallery_and_links() {
        let root = Node::from(page().render(&SectionId::from("about")));
        let lfw = Node::from(root.find_by_id("project-b").unwrap().clone());
        let gallery = lfw
            .find(&|e| e.attr(carousel::ROOT_ATTR) == Some("project-b"))
            .unwrap();
        let img = Node::from(gallery.clone());
        let img = img.find(&|e| e.tag() == "img").unwrap();
        assert_eq!(
            img.attr("src"),
            Some("/nori-portfolio/images/lfw/tour_de_LFW_1.jpeg")
        );
        let live = lfw
            .find(&|e| e.tag() == "a" && e.attr("href") == Some("https://example.com"))
            .unwrap();
        assert_eq!(Node::from(live.clone()).text_content(), "View Live");
        assert!(lfw.text_content().contains("London Fashion Week"));

        // No links, no button row.
        let alter = Node::from(root.find_by_id("project-a").unwrap().clone());
        assert!(alter.find(&|e| e.tag() == "a").is_none());
    }

    #[test]
    fn galleries_are_labelled_by_section() {
        let p = page();
        let ids: Vec<&str> = p.galleries().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["project-a", "project-b"]);
    }

    #[test]
    fn gallery_root_keeps_raw_section_id() {
        let id = "say \"hi\"\\path";
        let p = PortfolioPage::new(
            Profile {
                heading: "P".into(),
                name: "N".into(),
            },
            SiteConfig::root(),
            vec![(
                Section::new(0, id, "Quoted"),
                SectionBody::Project(ProjectContent {
                    headline: None,
                    description: "d".into(),
                    gallery: CarouselConfig::new("g/{index}.jpg", 2),
                    tags: vec![],
                    links: vec![],
                }),
            )],
        )
        .unwrap();
        assert_eq!(p.galleries().next().map(|(s, _)| s.as_str()), Some(id));

        let root = Node::from(p.render(&SectionId::from(id)));
        let gallery = root
            .find(&|e| e.attr(carousel::ROOT_ATTR).is_some())
            .unwrap();
        assert_eq!(gallery.attr(carousel::ROOT_ATTR), Some(id));

        let html = root.to_html();
        assert!(html.contains("data-carousel=\"say &quot;hi&quot;\\path\""));
    }

    #[test]
    fn invalid_content_is_rejected() {
        let profile = Profile {
            heading: "P".into(),
            name: "N".into(),
        };
        assert_eq!(
            PortfolioPage::new(profile.clone(), SiteConfig::root(), vec![]).unwrap_err(),
            ConfigError::NoSections
        );
        let bad_gallery = SectionBody::Project(ProjectContent {
            headline: None,
            description: "".into(),
            gallery: CarouselConfig::new("x/{index}.jpg", 0),
            tags: vec![],
            links: vec![],
        });
        assert_eq!(
            PortfolioPage::new(
                profile.clone(),
                SiteConfig::root(),
                vec![(Section::new(0, "a", "A"), bad_gallery)]
            )
            .unwrap_err(),
            ConfigError::NoImages
        );
        let about = || SectionBody::About(AboutContent::default());
        assert_eq!(
            PortfolioPage::new(
                profile,
                SiteConfig::root(),
                vec![
                    (Section::new(0, "a", "A"), about()),
                    (Section::new(1, "a", "B"), about()),
                ]
            )
            .unwrap_err(),
            ConfigError::DuplicateSection
        );
    }

    #[test]
    fn section_lookup() {
        let p = page();
        assert_eq!(p.section("project-a").map(Section::title), Some("ÆLTER ÆGO"));
        assert!(p.section("missing").is_none());
    }

    #[test]
    fn scroll_updates_observable_and_nav() {
        let p = page();
        let mut state = p.state(ScrollSpyConfig::default()).unwrap();
        assert_eq!(state.active(), &"about");

        let presenter = Rc::new(RefCell::new(HtmlPresenter::new()));
        let redraws = Rc::new(RefCell::new(0));
        let page = Rc::new(p);
        {
            let presenter = Rc::clone(&presenter);
            let redraws = Rc::clone(&redraws);
            let page = Rc::clone(&page);
            state.active_mut().subscribe(move |active| {
                *redraws.borrow_mut() += 1;
                presenter
                    .borrow_mut()
                    .present(&page.render_desktop_nav(active).into_node());
            });
        }

        let layout = |id: &SectionId| {
            let i = ["about", "project-a", "project-b"]
                .iter()
                .position(|s| id == s)?;
            Some(Extent::new(i as f64 * 1000.0, 1000.0))
        };
        assert!(!state.on_scroll(0.0, layout, HostTime(0), &mut Tracer::none()));
        assert!(state.on_scroll(950.0, layout, HostTime(1), &mut Tracer::none()));
        assert!(!state.on_scroll(1200.0, layout, HostTime(2), &mut Tracer::none()));
        assert_eq!(*redraws.borrow(), 1);
        assert_eq!(state.active(), &"project-a");
        let html = String::from(presenter.borrow().html());
        assert!(html.contains(&format!(
            "data-section=\"project-a\" class=\"{DESKTOP_ITEM} {DESKTOP_ACTIVE}\""
        )));
    }

    #[test]
    fn navigate_leaves_active_section() {
        let p = page();
        let state = p.state(ScrollSpyConfig::default()).unwrap();
        state.on_navigate("project-b", true, HostTime(0), &mut Tracer::none());
        assert_eq!(state.active(), &"about");
    }

    #[test]
    fn full_page_serializes() {
        let mut presenter = HtmlPresenter::new();
        presenter.present(&page().render(&SectionId::from("about")).into_node());
        let html = presenter.html();
        assert!(html.starts_with("<div class=\"min-h-screen bg-background\">"));
        assert!(html.contains("<h1 class=\"text-2xl font-bold\">Portfolio</h1>"));
        assert!(html.contains("<p class=\"text-muted-foreground\">Nora Julianna</p>"));
    }
}
