//! HTML embedding of a CZML document for notebooks and static pages.

use crate::document::Document;
use crate::encoder::Dump;
use crate::error::CzmlResult;
use crate::packet::Packet;
use serde::Deserialize;
use uuid::Uuid;

/// Terrain provider expression for a plain WGS84 ellipsoid.
pub const ELLIPSOID_TERRAIN: &str = "new Cesium.EllipsoidTerrainProvider()";

/// Terrain provider expression for Cesium World Terrain (needs an ion token).
pub const WORLD_TERRAIN: &str = "Cesium.createWorldTerrain()";

/// Imagery provider expression for OpenStreetMap tiles.
pub const OSM_IMAGERY: &str = "new Cesium.OpenStreetMapImageryProvider()";

/// Imagery provider expression for Bing aerial imagery (needs an ion token).
pub const BING_AERIAL_IMAGERY: &str = "Cesium.createWorldImagery()";

/// Viewer settings, usually read from a JSON file.
///
/// Every field is optional in the JSON form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// CesiumJS release to load from the Cesium CDN.
    pub cesium_version: String,
    /// Cesium ion access token; empty to leave the default.
    pub ion_token: String,
    /// JavaScript expression building the terrain provider.
    pub terrain: String,
    /// JavaScript expression building the imagery provider.
    pub imagery: String,
    /// CSS height of the viewer container.
    pub height: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            cesium_version: "1.88".to_string(),
            ion_token: String::new(),
            terrain: ELLIPSOID_TERRAIN.to_string(),
            imagery: OSM_IMAGERY.to_string(),
            height: "400px".to_string(),
        }
    }
}

/// A CesiumJS viewer showing one CZML payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CzmlWidget {
    czml: String,
    config: WidgetConfig,
    container_id: String,
}

impl CzmlWidget {
    /// Wrap an already serialized CZML payload. The text is embedded as is.
    pub fn new(czml: impl Into<String>, config: WidgetConfig) -> Self {
        Self {
            czml: czml.into(),
            config,
            container_id: Uuid::new_v4().to_string(),
        }
    }

    /// Serialize `document` and wrap it.
    pub fn from_document(document: &Document, config: WidgetConfig) -> CzmlResult<Self> {
        Ok(Self::new(document.to_json()?, config))
    }

    /// Use a fixed container id instead of a random one.
    pub fn with_container_id(mut self, container_id: impl Into<String>) -> Self {
        self.container_id = container_id.into();
        self
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// The JavaScript that creates the viewer and loads the CZML.
    pub fn build_script(&self) -> String {
        let WidgetConfig {
            cesium_version,
            ion_token,
            terrain,
            imagery,
            ..
        } = &self.config;
        format!(
            r#"
require.config({{
    paths: {{
        'cesium': 'https://cesium.com/downloads/cesiumjs/releases/{cesium_version}/Build/Cesium/Cesium'
    }}
}});

var CESIUM_BASE_URL = 'https://cesium.com/downloads/cesiumjs/releases/{cesium_version}/Build/Cesium/'

require(['cesium'], function (Cesium) {{
    var czml = {czml};

    var ion_token = {ion_token};
    if (ion_token !== '') {{
        Cesium.Ion.defaultAccessToken = ion_token;
    }}
    var viewer = new Cesium.Viewer('cesiumContainer-{container_id}', {{
        terrainProvider: {terrain},
        imageryProvider: {imagery},
        shouldAnimate : true
    }});

    viewer.camera.flyHome(0);
    viewer.scene.globe.enableLighting = true;

    viewer.dataSources.add(Cesium.CzmlDataSource.load(czml));
}});
"#,
            czml = self.czml,
            container_id = self.container_id,
            ion_token = js_string(ion_token),
        )
    }

    /// The HTML fragment: stylesheet, container and script.
    pub fn to_html(&self) -> String {
        format!(
            r#"
<link rel="stylesheet" href="https://cesium.com/downloads/cesiumjs/releases/{cesium_version}/Build/Cesium/Widgets/widgets.css" type="text/css">
<div id="cesiumContainer-{container_id}" style="width:100%; height:{height};"></div>
<script type="text/javascript">
{script}
</script>"#,
            cesium_version = self.config.cesium_version,
            container_id = self.container_id,
            height = self.config.height,
            script = self.build_script(),
        )
    }
}

/// A JavaScript string literal holding `text`, safe inside a `<script>` tag.
fn js_string(text: &str) -> String {
    serde_json::Value::from(text).to_string().replace("</", "<\\/")
}

/// A widget over a document holding only the preamble.
impl Default for CzmlWidget {
    fn default() -> Self {
        let document = Document::new(vec![Packet::preamble().build()]);
        // A preamble-only document always serializes.
        let czml = document.to_json().unwrap_or_else(|_| "[]".to_string());
        Self::new(czml, WidgetConfig::default())
    }
}
