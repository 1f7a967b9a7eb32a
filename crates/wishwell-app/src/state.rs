//! Application state container.
//!
//! Owns the live campaign document. Every mutation goes through a
//! whole-document replacement, so each state transition is one atomic
//! value swap; the section setters are conveniences that rebuild the
//! whole document before replacing it.

use wishwell_content::{
    CampaignContent, DonateContent, FooterContent, GalleryContent, HeroContent, MissionContent,
    TransparencyContent, UpdatesContent,
};

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    content: CampaignContent,
}

impl AppState {
    pub fn new(content: CampaignContent) -> Self {
        Self { content }
    }

    pub fn content(&self) -> &CampaignContent {
        &self.content
    }

    /// Replaces the whole document. The only real mutation.
    pub fn replace(&mut self, content: CampaignContent) {
        self.content = content;
    }

    pub fn set_campaign_name(&mut self, name: String) {
        let mut next = self.content.clone();
        next.campaign_name = name;
        self.replace(next);
    }

    pub fn set_donation_url(&mut self, url: String) {
        let mut next = self.content.clone();
        next.donation_url = url;
        self.replace(next);
    }

    pub fn set_hero(&mut self, hero: HeroContent) {
        let mut next = self.content.clone();
        next.hero = hero;
        self.replace(next);
    }

    pub fn set_mission(&mut self, mission: MissionContent) {
        let mut next = self.content.clone();
        next.mission = mission;
        self.replace(next);
    }

    pub fn set_transparency(&mut self, transparency: TransparencyContent) {
        let mut next = self.content.clone();
        next.transparency = transparency;
        self.replace(next);
    }

    pub fn set_updates(&mut self, updates: UpdatesContent) {
        let mut next = self.content.clone();
        next.updates = updates;
        self.replace(next);
    }

    pub fn set_gallery(&mut self, gallery: GalleryContent) {
        let mut next = self.content.clone();
        next.gallery = gallery;
        self.replace(next);
    }

    pub fn set_donate(&mut self, donate: DonateContent) {
        let mut next = self.content.clone();
        next.donate = donate;
        self.replace(next);
    }

    pub fn set_footer(&mut self, footer: FooterContent) {
        let mut next = self.content.clone();
        next.footer = footer;
        self.replace(next);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(CampaignContent::default())
    }
}
