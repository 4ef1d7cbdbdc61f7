use crate::client::PetAdoptClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::types::{BlogPost, BlogPostInput, BlogPostUpdate};

const POSTS: &str = "/blog";
const POST: &str = "/blog/:id";

impl PetAdoptClient {
    pub fn build_list_posts(&self) -> HttpRequest {
        self.request(HttpMethod::Get, POSTS, &[])
    }

    pub fn build_get_post(&self, id: &str) -> HttpRequest {
        self.request(HttpMethod::Get, POST, &[id])
    }

    pub fn build_create_post(&self, post: &BlogPostInput) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, POSTS, &[], post)
    }

    pub fn build_update_post(&self, id: &str, update: &BlogPostUpdate) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Put, POST, &[id], update)
    }

    pub fn build_delete_post(&self, id: &str) -> HttpRequest {
        self.request(HttpMethod::Delete, POST, &[id])
    }

    pub fn list_posts(&self) -> Result<Vec<BlogPost>, ApiError> {
        self.gateway().call(self.build_list_posts())
    }

    pub fn get_post(&self, id: &str) -> Result<BlogPost, ApiError> {
        self.gateway().call(self.build_get_post(id))
    }

    pub fn create_post(&self, post: &BlogPostInput) -> Result<BlogPost, ApiError> {
        self.gateway().call(self.build_create_post(post)?)
    }

    pub fn update_post(&self, id: &str, update: &BlogPostUpdate) -> Result<BlogPost, ApiError> {
        self.gateway().call(self.build_update_post(id, update)?)
    }

    pub fn delete_post(&self, id: &str) -> Result<(), ApiError> {
        self.gateway().call_unit(self.build_delete_post(id))
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_support::*;
    use crate::http::HttpMethod;
    use crate::types::{BlogPostInput, BlogPostUpdate};

    #[test]
    fn build_create_post_omits_empty_tags() {
        let req = client()
            .build_create_post(&BlogPostInput {
                title: "Winter care".to_string(),
                content: "Keep paws dry.".to_string(),
                tags: Vec::new(),
            })
            .unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert!(body_json(&req).get("tags").is_none());
    }

    #[test]
    fn build_update_post() {
        let req = client()
            .build_update_post(
                "b1",
                &BlogPostUpdate {
                    tags: Some(vec!["health".to_string()]),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(req.url, format!("{BASE_URL}/blog/b1"));
        assert_eq!(body_json(&req), serde_json::json!({"tags": ["health"]}));
    }

    #[test]
    fn build_get_and_delete_post_share_template() {
        let c = client();
        assert_eq!(c.build_get_post("b1").endpoint_key(), "GET /blog/:id");
        assert_eq!(c.build_delete_post("b1").endpoint_key(), "DELETE /blog/:id");
        assert_eq!(c.build_list_posts().endpoint_key(), "GET /blog");
    }
}
