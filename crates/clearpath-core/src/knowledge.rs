//! Knowledge base: article search, engagement counters, reading history

use shared_types::Article;

use crate::changes::ChangeNotifier;

pub struct KnowledgeStore {
    articles: Vec<Article>,
    reading_history: Vec<String>,
    pub changes: ChangeNotifier,
}

impl KnowledgeStore {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles,
            reading_history: Vec::new(),
            changes: ChangeNotifier::new(),
        }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn article(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    /// Article ids in the order they were first read.
    pub fn reading_history(&self) -> &[String] {
        &self.reading_history
    }

    /// Case-insensitive substring match over title, excerpt, content, and
    /// tags. An empty query returns every article.
    pub fn search(&self, query: &str) -> Vec<&Article> {
        let query = query.to_lowercase();
        self.articles
            .iter()
            .filter(|a| {
                if query.is_empty() {
                    return true;
                }
                a.title.to_lowercase().contains(&query)
                    || a.excerpt.to_lowercase().contains(&query)
                    || a.content.to_lowercase().contains(&query)
                    || a.tags.iter().any(|t| t.to_lowercase().contains(&query))
            })
            .collect()
    }

    /// Record that the article was read. Idempotent: repeat reads never
    /// duplicate the history entry.
    pub fn mark_as_read(&mut self, id: &str) {
        if self.reading_history.iter().any(|read| read == id) {
            return;
        }
        self.reading_history.push(id.to_string());
        self.changes.emit();
    }

    /// Bump exactly one of the helpful counters. Silent no-op on unknown id.
    pub fn rate_article(&mut self, id: &str, helpful: bool) {
        let Some(article) = self.articles.iter_mut().find(|a| a.id == id) else {
            tracing::warn!(article_id = id, "rate_article on unknown id");
            return;
        };
        if helpful {
            article.helpful += 1;
        } else {
            article.not_helpful += 1;
        }
        self.changes.emit();
    }

    /// Unconditional view count; repeat views all count.
    pub fn increment_views(&mut self, id: &str) {
        let Some(article) = self.articles.iter_mut().find(|a| a.id == id) else {
            tracing::warn!(article_id = id, "increment_views on unknown id");
            return;
        };
        article.views += 1;
        self.changes.emit();
    }

    /// Top-n articles by view count, descending; ties keep catalog order.
    pub fn popular(&self, n: usize) -> Vec<&Article> {
        let mut ranked: Vec<&Article> = self.articles.iter().collect();
        ranked.sort_by(|a, b| b.views.cmp(&a.views));
        ranked.truncate(n);
        ranked
    }

    /// Top-n articles by last update, newest first.
    pub fn recent(&self, n: usize) -> Vec<&Article> {
        let mut ranked: Vec<&Article> = self.articles.iter().collect();
        ranked.sort_by(|a, b| b.last_updated.cmp(&a.last_updated));
        ranked.truncate(n);
        ranked
    }
}
