use apidoc_core::{
    generate, AppError, DocxWriter, JsonWriter, MarkdownWriter, OutputFormat, TableKind,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::io::Read;

const PETSTORE_V2: &str = r##"{
  "swagger": "2.0",
  "info": {"title": "Petstore", "version": "1.0"},
  "paths": {
    "/pets": {
      "get": {
        "summary": "List pets",
        "description": "Returns all pets | paged",
        "parameters": [
          {"name": "limit", "in": "query", "type": "integer", "description": "Page size"},
          {"name": "X-Trace", "in": "header", "required": true}
        ],
        "responses": {
          "200": {"description": "A list of pets"},
          "default": {"description": "Unexpected error"}
        }
      },
      "post": {
        "summary": "Create a pet",
        "parameters": [{"name": "body", "in": "body", "required": true, "schema": {"$ref": "#/definitions/Pet"}}],
        "responses": {"201": {"description": "Created"}}
      }
    },
    "/pets/{petId}": {
      "get": {
        "summary": "Info for a pet",
        "parameters": [{"name": "petId", "in": "path", "required": true, "type": "string"}]
      }
    }
  },
  "definitions": {
    "Pet": {
      "required": ["id"],
      "properties": {
        "id": {"type": "integer", "format": "int64"},
        "tag": {"type": "string", "description": "Free-form tag"}
      }
    },
    "Error": {}
  }
}"##;

const PETSTORE_V3: &str = r#"
openapi: 3.0.3
info:
  title: Petstore
  version: 1.0.0
paths:
  /pets:
    get:
      summary: List pets
      parameters:
        - name: limit
          in: query
          schema:
            type: integer
      responses:
        200:
          description: A paged array of pets
          content:
            application/json:
              schema:
                $ref: '#/components/schemas/Pets'
components:
  schemas:
    Pet:
      properties:
        id:
          type: integer
    Pets:
      type: array
"#;

#[test]
fn test_swagger_v2_to_markdown() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("swagger.json");
    let output = dir.path().join("out/api.md");
    fs::write(&input, PETSTORE_V2).unwrap();

    generate(&input, &output, &MarkdownWriter).unwrap();

    let expected = r#"# API Documentation

## GET /pets

**List pets**

Returns all pets | paged

### Parameters

| Name | In | Type | Description | Required |
| --- | --- | --- | --- | --- |
| limit | query | integer | Page size | No |
| X-Trace | header | - | - | Yes |

### Responses

| HTTP Code | Description | Schema |
| --- | --- | --- |
| 200 | A list of pets | - |
| default | Unexpected error | - |

## POST /pets

**Create a pet**

### Parameters

| Name | In | Type | Description | Required |
| --- | --- | --- | --- | --- |
| body | body | - | - | Yes |

### Responses

| HTTP Code | Description | Schema |
| --- | --- | --- |
| 201 | Created | - |

## GET /pets/{petId}

**Info for a pet**

### Parameters

| Name | In | Type | Description | Required |
| --- | --- | --- | --- | --- |
| petId | path | string | - | Yes |

# Models

## Pet

| Property | Type | Description |
| --- | --- | --- |
| id | integer | - |
| tag | string | Free-form tag |

## Error

| Property | Type | Description |
| --- | --- | --- |

"#;
    assert_eq!(fs::read_to_string(&output).unwrap(), expected);
}

#[test]
fn test_openapi_v3_yaml_to_docx() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("openapi.yaml");
    let output = dir.path().join("api.docx");
    fs::write(&input, PETSTORE_V3).unwrap();

    let doc = generate(&input, &output, &DocxWriter).unwrap();

    let titles: Vec<&str> = doc.headings().into_iter().map(|(_, t)| t).collect();
    assert_eq!(
        titles,
        vec!["API Documentation", "GET /pets", "Parameters", "Responses", "Models", "Pet", "Pets"]
    );

    let tables = doc.tables();
    assert_eq!(tables[0].rows[0], vec!["limit", "query", "integer", "-", "No"]);
    assert_eq!(tables[1].rows[0], vec!["200", "A paged array of pets", "#/components/schemas/Pets"]);
    assert_eq!(tables[3].kind, TableKind::Properties);
    assert!(tables[3].rows.is_empty());

    let bytes = fs::read(&output).unwrap();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();
    assert!(xml.contains("GET /pets"));
    assert!(xml.contains("#/components/schemas/Pets"));
}

#[test]
fn test_empty_description_renders_title_only() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("swagger.json");
    let output = dir.path().join("api.json");
    fs::write(&input, r#"{"paths": {}}"#).unwrap();

    let doc = generate(&input, &output, &JsonWriter).unwrap();
    assert_eq!(doc.headings(), vec![(1, "API Documentation")]);
    assert!(doc.tables().is_empty());
}

#[test]
fn test_rendering_twice_is_identical() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("swagger.json");
    fs::write(&input, PETSTORE_V2).unwrap();

    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");
    let doc_a = generate(&input, &first, &JsonWriter).unwrap();
    let doc_b = generate(&input, &second, &JsonWriter).unwrap();

    assert_eq!(doc_a, doc_b);
    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_endpoint_blocks_follow_source_order() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("swagger.json");
    let output = dir.path().join("api.md");
    fs::write(&input, PETSTORE_V2).unwrap();

    generate(&input, &output, &MarkdownWriter).unwrap();
    let markdown = fs::read_to_string(&output).unwrap();

    let list = markdown.find("## GET /pets\n").unwrap();
    let create = markdown.find("## POST /pets").unwrap();
    let info = markdown.find("## GET /pets/{petId}").unwrap();
    let models = markdown.find("# Models").unwrap();
    assert!(list < create && create < info && info < models);
}

#[test]
fn test_missing_input_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("swagger.json");
    let output = dir.path().join("api.docx");

    let err = generate(&input, &output, &DocxWriter).unwrap_err();
    assert!(matches!(err, AppError::InputIo { .. }));
    assert!(!output.exists());
}

#[test]
fn test_invalid_json_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("swagger.json");
    let output = dir.path().join("api.docx");
    fs::write(&input, "{\"paths\": {\"/a\": }").unwrap();

    let err = generate(&input, &output, &DocxWriter).unwrap_err();
    assert!(matches!(err, AppError::InputParse { line: 1, .. }));
    assert!(!output.exists());
}

#[test]
fn test_format_inferred_from_destination() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("swagger.json");
    let output = dir.path().join("api.markdown");
    fs::write(&input, PETSTORE_V2).unwrap();

    let writer = OutputFormat::from_path(&output).writer();
    generate(&input, &output, writer.as_ref()).unwrap();
    assert!(fs::read_to_string(&output)
        .unwrap()
        .starts_with("# API Documentation\n"));
}
