//! Master-data documents: the registration form layout and the identity
//! record schema clients validate submissions against.

/// Dynamic form layout served at `/masterdata/ui-spec`.
pub const UI_SPEC: &str = r#"{
  "response": {
    "schema": [
      {
        "id": "email",
        "controlType": "textbox",
        "labelName": { "en": "Email" },
        "placeholder": { "eng": "Enter your email" },
        "validators": [],
        "required": false,
        "disabled": true,
        "prefix": [],
        "alignmentGroup": "groupA"
      },
      {
        "id": "homeCountry",
        "controlType": "dropdown",
        "labelName": { "eng": "Country" },
        "placeholder": { "en": "Select Country" },
        "validators": [],
        "alignmentGroup": "groupH",
        "required": true,
        "subType": "country"
      },
      {
        "id": "passportId",
        "controlType": "textbox",
        "labelName": { "eng": "Passport ID" },
        "placeholder": { "en": "Enter Passport ID" },
        "required": true,
        "alignmentGroup": "groupM"
      },
      {
        "id": "expireDate",
        "controlType": "date",
        "labelName": { "eng": "Passport Expire Date" },
        "alignmentGroup": "expiredate",
        "required": true
      },
      {
        "id": "encodedPhoto",
        "controlType": "photo",
        "labelName": { "eng": "Capture Photo", "khm": "ថតរូប" },
        "placeholder": { "eng": "Click to capture photo", "khm": "ចុចដើម្បីថតរូប" },
        "info": {
          "eng": "Please click here to capture your photo using your device's camera.",
          "khm": "សូមចុចទីនេះដើម្បីថតរូបរបស់អ្នកដោយប្រើកាមេរ៉ារបស់ឧបករណ៍របស់អ្នក។"
        },
        "acceptedFileTypes": "image/jpeg , image/jpg , image/png , image/webp",
        "required": true,
        "alignmentGroup": "groupF"
      },
      {
        "id": "consent",
        "controlType": "checkbox",
        "labelName": {
          "eng": "I agree to Veridonia’s <b><a href='#'>Terms & Conditions</a></b> and <b><a href='#'>Privacy Policy</a></b>, to store & process my information as required."
        },
        "required": true,
        "alignmentGroup": "groupO"
      }
    ],
    "allowedValues": {
      "country": {
        "westalis": { "eng": "Westalis" },
        "india": { "eng": "India" },
        "morocco": { "eng": "Morocco" }
      }
    },
    "i18nValues": {
      "errors": {
        "required": { "en": "This field is required" }
      },
      "labels": {
        "capturePhoto": { "en": "Capture Photo", "km": "ថតរូប" },
        "clickToUpload": { "en": "Click to upload", "km": "ចុចដើម្បីបញ្ចូលឬថតរូប" }
      },
      "placeholders": {}
    },
    "language": {
      "mandatory": ["eng", "fra"],
      "optional": [],
      "langCodeMap": { "eng": "en", "fra": "fr" }
    },
    "maxUploadFileSize": 5242880
  }
}"#;

/// JSON Schema (draft 2020-12) for an identity record, served at
/// `/masterdata/identity-schema`.
pub const IDENTITY_SCHEMA: &str = r#"{
  "$schema": "https://json-schema.org/draft/2020-12/schema",
  "type": "object",
  "$defs": {
    "langField": {
      "type": "array",
      "items": {
        "type": "object",
        "properties": {
          "language": { "type": "string" },
          "value": { "type": "string" }
        },
        "required": ["language", "value"],
        "additionalProperties": false
      }
    }
  },
  "properties": {
    "individualId": { "type": "string", "pattern": "\\S" },
    "passportId": { "type": "string" },
    "expireDate": { "type": "string" },
    "consent": { "type": "boolean" },
    "homeCountry": { "type": "string" },
    "encodedPhoto": { "type": "string" }
  },
  "required": [
    "individualId",
    "homeCountry",
    "passportId",
    "email",
    "consent",
    "encodedPhoto"
  ],
  "additionalProperties": true
}"#;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_ui_spec_layout() {
        let doc: Value = serde_json::from_str(UI_SPEC).unwrap();
        let response = &doc["response"];

        let ids: Vec<&str> = response["schema"]
            .as_array()
            .unwrap()
            .iter()
            .map(|field| field["id"].as_str().unwrap())
            .collect();
        assert_eq!(
            ids,
            ["email", "homeCountry", "passportId", "expireDate", "encodedPhoto", "consent"]
        );

        assert_eq!(response["allowedValues"]["country"]["india"]["eng"], "India");
        assert_eq!(response["language"]["langCodeMap"]["fra"], "fr");
        assert_eq!(response["maxUploadFileSize"], 5_242_880);
    }

    #[test]
    fn test_identity_schema_layout() {
        let doc: Value = serde_json::from_str(IDENTITY_SCHEMA).unwrap();
        assert_eq!(doc["$schema"], "https://json-schema.org/draft/2020-12/schema");
        assert_eq!(doc["properties"]["individualId"]["pattern"], "\\S");
        assert_eq!(doc["properties"]["consent"]["type"], "boolean");
        assert_eq!(doc["$defs"]["langField"]["type"], "array");
        assert_eq!(doc["additionalProperties"], true);
    }
}
