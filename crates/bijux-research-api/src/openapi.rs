// SPDX-License-Identifier: Apache-2.0

use serde_json::{json, Value};

#[must_use]
pub fn openapi_v1_spec() -> Value {
    json!({
      "openapi": "3.0.3",
      "info": {
        "title": "Research Agent Pro API",
        "version": "v1"
      },
      "paths": {
        "/api": {"get": {"responses": {"200": {"description": "service info"}}}},
        "/health": {"get": {"responses": {"200": {"description": "healthy or degraded"}}}},
        "/api/v1/research": {
          "post": {
            "requestBody": {
              "required": true,
              "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ResearchRequest"}}}
            },
            "responses": {
              "200": {"description": "research report"},
              "400": {"description": "invalid query", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ApiErrorEnvelope"}}}},
              "413": {"description": "payload too large"},
              "504": {"description": "research timed out"}
            }
          }
        },
        "/api/v1/research/quick": {
          "post": {
            "parameters": [{"name": "query", "in": "query", "required": true, "schema": {"type": "string"}}],
            "responses": {"200": {"description": "placeholder report"}, "400": {"description": "invalid query"}}
          }
        },
        "/api/v1/research/test": {"get": {"responses": {"200": {"description": "self test"}, "504": {"description": "self test timed out"}}}}
      },
      "components": {
        "schemas": {
          "ResearchRequest": {
            "type": "object",
            "required": ["query"],
            "properties": {"query": {"type": "string", "minLength": 1}}
          },
          "ApiError": {
            "type": "object",
            "required": ["code", "message", "details", "request_id"],
            "properties": {
              "code": {"type": "string", "enum": ["InvalidQueryParameter", "PayloadTooLarge", "Timeout", "NotReady", "Internal"]},
              "message": {"type": "string"},
              "details": {"type": "object"},
              "request_id": {"type": "string"}
            }
          },
          "ApiErrorEnvelope": {
            "type": "object",
            "required": ["error"],
            "properties": {"error": {"$ref": "#/components/schemas/ApiError"}}
          }
        }
      }
    })
}
