//! Data models representing auctions and the paged listing envelope.

use serde::Deserialize;

use crate::error::ClientError;

use super::pagination::PageInfo;

/// Auction snapshot shown in the search listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Auction {
    /// Auction identifier.
    pub id: u64,
    /// Closing timestamp as sent by the server.
    pub closing_time: Option<String>,
    /// Creation timestamp as sent by the server.
    pub created_time: Option<String>,
    /// Opening bid.
    pub starting_price: Option<f64>,
    /// Title of the lot.
    pub name: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Category label.
    pub category: Option<String>,
    /// Image reference (URL or encoded image).
    pub image: Option<String>,
    /// Display name of the owning user.
    pub user_name: Option<String>,
}

/// One page of auctions together with its pagination state.
#[derive(Debug, Clone, PartialEq)]
pub struct AuctionPage {
    /// Auctions on this page.
    pub items: Vec<Auction>,
    /// Pagination state for the page.
    pub page_info: PageInfo,
}

impl AuctionPage {
    /// Decodes a listing envelope for the given 1-based page.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] when the body is not valid JSON or
    /// lacks the `_embedded.auctions` / `page` members.
    pub fn from_json(body: &str, current_page: u32, page_size: u32) -> Result<Self, ClientError> {
        let envelope: ApiAuctionEnvelope =
            serde_json::from_str(body).map_err(|error| ClientError::decode(&error))?;
        Ok(envelope.into_page(current_page, page_size))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiAuctionEnvelope {
    #[serde(rename = "_embedded")]
    pub(crate) embedded: ApiEmbedded,
    pub(crate) page: ApiPageMetadata,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiEmbedded {
    pub(crate) auctions: Vec<ApiAuction>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiPageMetadata {
    pub(crate) total_elements: u64,
    pub(crate) total_pages: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiAuction {
    pub(crate) id: u64,
    pub(crate) closing_time: Option<String>,
    pub(crate) created_time: Option<String>,
    pub(crate) starting_price: Option<f64>,
    pub(crate) name: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) category: Option<String>,
    pub(crate) img: Option<String>,
    pub(crate) user_name: Option<String>,
}

impl ApiAuctionEnvelope {
    pub(crate) fn into_page(self, current_page: u32, page_size: u32) -> AuctionPage {
        let page_info = PageInfo::new(current_page, page_size)
            .with_totals(self.page.total_elements, self.page.total_pages);
        AuctionPage {
            items: self
                .embedded
                .auctions
                .into_iter()
                .map(ApiAuction::into)
                .collect(),
            page_info,
        }
    }
}

impl From<ApiAuction> for Auction {
    fn from(value: ApiAuction) -> Self {
        Self {
            id: value.id,
            closing_time: value.closing_time,
            created_time: value.created_time,
            starting_price: value.starting_price,
            name: value.name,
            description: value.description,
            category: value.category,
            image: value.img,
            user_name: value.user_name,
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    //! Builders for auction fixtures used across test modules.

    use super::Auction;

    /// Constructs an auction with only `id` and `name` populated.
    #[must_use]
    pub fn minimal_auction(id: u64, name: &str) -> Auction {
        Auction {
            id,
            closing_time: None,
            created_time: None,
            starting_price: None,
            name: Some(name.to_owned()),
            description: None,
            category: None,
            image: None,
            user_name: None,
        }
    }

    /// Builds the JSON envelope the auction API returns for one page.
    #[must_use]
    pub fn envelope_json(
        names: &[&str],
        total_elements: u64,
        total_pages: u32,
    ) -> serde_json::Value {
        let auctions: Vec<serde_json::Value> = names
            .iter()
            .zip(1_u64..)
            .map(|(name, id)| {
                serde_json::json!({
                    "id": id,
                    "closingTime": "2024-06-01T12:00:00",
                    "createdTime": "2024-05-01T12:00:00",
                    "startingPrice": 10.5,
                    "name": name,
                    "description": format!("{name} description"),
                    "category": "Electronic",
                    "img": null,
                    "userName": "auctioneer"
                })
            })
            .collect();
        serde_json::json!({
            "_embedded": { "auctions": auctions },
            "page": { "size": 5, "totalElements": total_elements, "totalPages": total_pages, "number": 0 }
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::test_support::envelope_json;
    use super::*;

    #[rstest]
    fn decodes_envelope_into_page() {
        let body = envelope_json(&["Lamp", "Chair"], 12, 3).to_string();

        let page = AuctionPage::from_json(&body, 2, 5).expect("envelope should decode");

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items.first().and_then(|a| a.name.as_deref()), Some("Lamp"));
        assert_eq!(
            page.items.first().and_then(|a| a.user_name.as_deref()),
            Some("auctioneer")
        );
        assert_eq!(page.page_info.total_elements(), 12);
        assert_eq!(page.page_info.total_pages(), 3);
        assert_eq!(page.page_info.current_page(), 2);
    }

    #[rstest]
    #[case::missing_embedded(r#"{"page":{"totalElements":0,"totalPages":0}}"#)]
    #[case::missing_page(r#"{"_embedded":{"auctions":[]}}"#)]
    #[case::not_json("<html>oops</html>")]
    #[case::auction_without_id(
        r#"{"_embedded":{"auctions":[{"name":"x"}]},"page":{"totalElements":1,"totalPages":1}}"#
    )]
    fn malformed_envelopes_fail_with_decode_error(#[case] body: &str) {
        let result = AuctionPage::from_json(body, 1, 5);

        assert!(
            matches!(result, Err(ClientError::Decode { .. })),
            "expected decode error, got {result:?}"
        );
    }

    #[rstest]
    fn image_reference_maps_from_img_field() {
        let body = r#"{"_embedded":{"auctions":[{"id":9,"img":"data:image/png;base64,AAA"}]},"page":{"totalElements":1,"totalPages":1}}"#;

        let page = AuctionPage::from_json(body, 1, 5).expect("envelope should decode");
        let auction = page.items.first().expect("one auction");

        assert_eq!(auction.id, 9);
        assert_eq!(auction.image.as_deref(), Some("data:image/png;base64,AAA"));
        assert!(auction.name.is_none());
    }
}
