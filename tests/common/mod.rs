#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet, VecDeque},
    sync::Mutex,
};

use async_trait::async_trait;
use reqwest::StatusCode;
use syntify::{
    Error, Res,
    converter::{PlaylistSink, PlaylistSource},
    matching::CatalogSearch,
    types::MatchCandidate,
};

pub fn candidate(display: &str, identifier: &str) -> MatchCandidate {
    MatchCandidate::new(display, identifier)
}

pub fn api_error() -> Error {
    Error::Api {
        status: StatusCode::BAD_GATEWAY,
        message: "upstream unavailable".to_string(),
    }
}

/// Answers searches from a queue, one response per call, then empty lists.
#[derive(Default)]
pub struct ScriptedCatalog {
    responses: Mutex<VecDeque<Res<Vec<MatchCandidate>>>>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl ScriptedCatalog {
    pub fn new(responses: Vec<Res<Vec<MatchCandidate>>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogSearch for ScriptedCatalog {
    async fn search(&self, query: &str, limit: u32) -> Res<Vec<MatchCandidate>> {
        self.calls.lock().unwrap().push((query.to_string(), limit));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Answers searches by exact query; unknown queries find nothing.
#[derive(Default)]
pub struct MapCatalog {
    pub results: HashMap<String, Vec<MatchCandidate>>,
    pub failing: HashSet<String>,
    unauthorized: bool,
    calls: Mutex<Vec<String>>,
}

impl MapCatalog {
    pub fn with(mut self, query: &str, candidates: Vec<MatchCandidate>) -> Self {
        self.results.insert(query.to_string(), candidates);
        self
    }

    pub fn failing_on(mut self, query: &str) -> Self {
        self.failing.insert(query.to_string());
        self
    }

    pub fn unauthorized() -> Self {
        Self {
            unauthorized: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogSearch for MapCatalog {
    async fn search(&self, query: &str, limit: u32) -> Res<Vec<MatchCandidate>> {
        self.calls.lock().unwrap().push(query.to_string());
        if self.unauthorized {
            return Err(Error::Authentication("token expired".to_string()));
        }
        if self.failing.contains(query) {
            return Err(api_error());
        }

        let mut found = self.results.get(query).cloned().unwrap_or_default();
        found.truncate(limit as usize);
        Ok(found)
    }
}

pub struct FakeSource {
    pub titles: Vec<String>,
    pub name: Option<String>,
}

impl FakeSource {
    pub fn new(titles: &[&str]) -> Self {
        Self {
            titles: titles.iter().map(|t| t.to_string()).collect(),
            name: None,
        }
    }
}

#[async_trait]
impl PlaylistSource for FakeSource {
    async fn list_titles(&self, _playlist_id: &str) -> Res<Vec<String>> {
        Ok(self.titles.clone())
    }

    async fn playlist_title(&self, _playlist_id: &str) -> Res<Option<String>> {
        Ok(self.name.clone())
    }
}

#[derive(Default)]
pub struct RecordingSink {
    created: Mutex<Vec<String>>,
    added: Mutex<Vec<(String, Vec<String>)>>,
    failing_add: bool,
}

impl RecordingSink {
    /// Creates playlists but rejects every add request.
    pub fn failing_add() -> Self {
        Self {
            failing_add: true,
            ..Default::default()
        }
    }

    pub fn created(&self) -> Vec<String> {
        self.created.lock().unwrap().clone()
    }

    pub fn added(&self) -> Vec<(String, Vec<String>)> {
        self.added.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlaylistSink for RecordingSink {
    async fn create_playlist(&self, name: &str) -> Res<String> {
        let mut created = self.created.lock().unwrap();
        created.push(name.to_string());
        Ok(format!("playlist-{}", created.len()))
    }

    async fn add_tracks(&self, playlist_id: &str, identifiers: &[String]) -> Res<()> {
        if self.failing_add {
            return Err(api_error());
        }
        self.added
            .lock()
            .unwrap()
            .push((playlist_id.to_string(), identifiers.to_vec()));
        Ok(())
    }
}
