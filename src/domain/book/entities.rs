//! Book Context - Entities

use super::errors::BookValidationError;

/// 图书实体
///
/// 不变量:
/// - title 和 author 不可为空
/// - id 由存储引擎分配，应用层不生成
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub published_year: i32,
}

impl Book {
    /// 应用部分更新补丁，只有补丁中提供的字段会被修改
    ///
    /// 补丁应用后仍需满足实体不变量，否则整体拒绝且实体不变
    pub fn apply(&mut self, patch: &BookPatch) -> Result<(), BookValidationError> {
        if let Some(title) = &patch.title {
            validate_non_empty("title", title)?;
        }
        if let Some(author) = &patch.author {
            validate_non_empty("author", author)?;
        }

        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(author) = &patch.author {
            self.author = author.clone();
        }
        if let Some(isbn) = &patch.isbn {
            self.isbn = isbn.clone();
        }
        if let Some(year) = patch.published_year {
            self.published_year = year;
        }

        Ok(())
    }
}

/// 新建图书草稿（尚未分配 id）
#[derive(Debug, Clone)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub published_year: i32,
}

impl BookDraft {
    /// 创建并校验草稿
    pub fn new(
        title: String,
        author: String,
        isbn: String,
        published_year: i32,
    ) -> Result<Self, BookValidationError> {
        validate_non_empty("title", &title)?;
        validate_non_empty("author", &author)?;

        Ok(Self {
            title,
            author,
            isbn,
            published_year,
        })
    }
}

/// 部分更新补丁
///
/// None 表示对应字段不修改；isbn 格式不做校验
#[derive(Debug, Clone, Default)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub published_year: Option<i32>,
}

fn validate_non_empty(field: &'static str, value: &str) -> Result<(), BookValidationError> {
    if value.is_empty() {
        return Err(BookValidationError::EmptyField(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
        Book {
            id: 1,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            isbn: "9780441013593".to_string(),
            published_year: 1965,
        }
    }

    #[test]
    fn test_draft_rejects_empty_title() {
        let result = BookDraft::new(
            String::new(),
            "Frank Herbert".to_string(),
            "9780441013593".to_string(),
            1965,
        );
        assert_eq!(result.unwrap_err(), BookValidationError::EmptyField("title"));
    }

    #[test]
    fn test_draft_rejects_empty_author() {
        let result = BookDraft::new(
            "Dune".to_string(),
            String::new(),
            "9780441013593".to_string(),
            1965,
        );
        assert_eq!(
            result.unwrap_err(),
            BookValidationError::EmptyField("author")
        );
    }

    #[test]
    fn test_draft_allows_empty_isbn() {
        let result = BookDraft::new(
            "Dune".to_string(),
            "Frank Herbert".to_string(),
            String::new(),
            1965,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_apply_changes_only_supplied_fields() {
        let mut book = sample_book();
        let patch = BookPatch {
            title: Some("Dune Messiah".to_string()),
            ..Default::default()
        };

        book.apply(&patch).unwrap();

        assert_eq!(book.title, "Dune Messiah");
        assert_eq!(book.author, "Frank Herbert");
        assert_eq!(book.isbn, "9780441013593");
        assert_eq!(book.published_year, 1965);
    }

    #[test]
    fn test_apply_empty_patch_is_noop() {
        let mut book = sample_book();
        book.apply(&BookPatch::default()).unwrap();
        assert_eq!(book, sample_book());
    }

    #[test]
    fn test_apply_rejects_empty_title_and_leaves_book_unchanged() {
        let mut book = sample_book();
        let patch = BookPatch {
            title: Some(String::new()),
            author: Some("Someone Else".to_string()),
            ..Default::default()
        };

        let result = book.apply(&patch);

        assert_eq!(
            result.unwrap_err(),
            BookValidationError::EmptyField("title")
        );
        assert_eq!(book, sample_book());
    }
}
