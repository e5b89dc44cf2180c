// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What the page says.

use alloc::vec;
use alloc::vec::Vec;

use folio_core::carousel::CarouselConfig;
use folio_core::error::ConfigError;
use folio_core::page::{
    AboutContent, PortfolioPage, Profile, ProjectContent, ProjectLink, SectionBody,
};
use folio_core::section::Section;
use folio_core::site::SiteConfig;

/// Deployment prefix.
const BASE_PATH: &str = "/nori-portfolio";

pub(crate) fn page() -> Result<PortfolioPage, ConfigError> {
    PortfolioPage::new(
        Profile {
            heading: "Portfolio".into(),
            name: "Nora Julianna".into(),
        },
        SiteConfig::under(BASE_PATH),
        vec![
            (Section::new(0, "about", "About"), about()),
            (
                Section::new(1, "project-a", "ÆLTER ÆGO"),
                project(
                    CarouselConfig::new("images/projects/alterego/alterego{index}.{ext}", 5)
                        .with_alt_text("ÆLTER ÆGO"),
                    "short description",
                    &["key word", "key word2", "key word3"],
                    Vec::new(),
                ),
            ),
            (
                Section::new(2, "project-b", "Starshaped"),
                project(
                    CarouselConfig::new("images/projects/starshaped/starshaped{index}.{ext}", 6)
                        .with_alt_text("Starshaped"),
                    "xx",
                    &["keyword", "keyword2", "keyword3"],
                    Vec::new(),
                ),
            ),
            (
                Section::new(3, "project-c", "Street Photography"),
                project(
                    CarouselConfig::new(
                        "images/projects/street-photography/street_photo_{index}.{ext}",
                        8,
                    )
                    .with_alt_text("Street photograph"),
                    "xx",
                    &["keyword", "keyword2", "keyword3"],
                    Vec::new(),
                ),
            ),
            (
                Section::new(4, "project-d", "Tour de LFW"),
                project(
                    CarouselConfig::new("images/projects/tour-de-lfw/tour_de_LFW_{index}.{ext}", 4)
                        .with_extension("jpeg")
                        .with_alt_text("Tour de LFW"),
                    "xxx",
                    &["kérdés", "kérdés2", "kérdés3"],
                    vec![ProjectLink::live("#"), ProjectLink::code("#")],
                ),
            ),
        ],
    )
}

fn about() -> SectionBody {
    SectionBody::About(AboutContent {
        portrait: None,
        intro: "ars poetica".into(),
        skills: [
            "something",
            "like",
            "street photography",
            "brutalist",
            "and other",
            "keywords",
        ]
        .into_iter()
        .map(Into::into)
        .collect(),
        contact: ["your.email@example.com", "+36 phone number", "Budapest, HU"]
            .into_iter()
            .map(Into::into)
            .collect(),
    })
}

fn project(
    gallery: CarouselConfig,
    description: &'static str,
    tags: &[&'static str],
    links: Vec<ProjectLink>,
) -> SectionBody {
    SectionBody::Project(ProjectContent {
        headline: None,
        description: description.into(),
        gallery,
        tags: tags.iter().map(|&t| t.into()).collect(),
        links,
    })
}
