// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::{DiscoError, Result};
use crate::models::registry::{CanonicalValue, FieldKind};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distribution {
    Aoj,
    AojOpenJ9,
    Bisheng,
    Corretto,
    Dragonwell,
    GluonGraalVm,
    GraalVmCe8,
    GraalVmCe11,
    GraalVmCe16,
    GraalVmCe17,
    JetBrains,
    Kona,
    Liberica,
    LibericaNative,
    Mandrel,
    Microsoft,
    OjdkBuild,
    OpenLogic,
    Oracle,
    OracleOpenJdk,
    SapMachine,
    Semeru,
    SemeruCertified,
    Temurin,
    Trava,
    Zulu,
    ZuluPrime,
}

struct DistributionInfo {
    label: &'static str,
    api: &'static str,
    maintained: bool,
    synonyms: &'static [&'static str],
}

const ALL: &[Distribution] = &[
    Distribution::Aoj,
    Distribution::AojOpenJ9,
    Distribution::Bisheng,
    Distribution::Corretto,
    Distribution::Dragonwell,
    Distribution::GluonGraalVm,
    Distribution::GraalVmCe8,
    Distribution::GraalVmCe11,
    Distribution::GraalVmCe16,
    Distribution::GraalVmCe17,
    Distribution::JetBrains,
    Distribution::Kona,
    Distribution::Liberica,
    Distribution::LibericaNative,
    Distribution::Mandrel,
    Distribution::Microsoft,
    Distribution::OjdkBuild,
    Distribution::OpenLogic,
    Distribution::Oracle,
    Distribution::OracleOpenJdk,
    Distribution::SapMachine,
    Distribution::Semeru,
    Distribution::SemeruCertified,
    Distribution::Temurin,
    Distribution::Trava,
    Distribution::Zulu,
    Distribution::ZuluPrime,
];

const fn entry(
    label: &'static str,
    api: &'static str,
    maintained: bool,
    synonyms: &'static [&'static str],
) -> DistributionInfo {
    DistributionInfo {
        label,
        api,
        maintained,
        synonyms,
    }
}

impl Distribution {
    /// Distribution used when the user does not pick one.
    pub const PRIMARY: Distribution = Distribution::Zulu;

    fn info(self) -> DistributionInfo {
        match self {
            Distribution::Aoj => entry("AdoptOpenJDK", "aoj", false, &["aoj", "AOJ", "adopt"]),
            Distribution::AojOpenJ9 => entry(
                "AdoptOpenJDK OpenJ9",
                "aoj_openj9",
                false,
                &[
                    "aoj_openj9",
                    "AOJ_OpenJ9",
                    "AOJ_OPENJ9",
                    "AOJ OpenJ9",
                    "AOJ OPENJ9",
                    "aoj openj9",
                ],
            ),
            Distribution::Bisheng => entry(
                "Bi Sheng",
                "bisheng",
                true,
                &[
                    "bisheng", "BISHENG", "BiSheng", "bi_sheng", "BI_SHENG", "bi-sheng",
                    "BI-SHENG", "bi sheng", "BI SHENG", "Bi Sheng",
                ],
            ),
            Distribution::Corretto => entry(
                "Corretto",
                "corretto",
                true,
                &["corretto", "CORRETTO", "Corretto"],
            ),
            Distribution::Dragonwell => entry(
                "Dragonwell",
                "dragonwell",
                true,
                &["dragonwell", "DRAGONWELL", "Dragonwell"],
            ),
            Distribution::GluonGraalVm => entry(
                "Gluon GraalVM",
                "gluon_graalvm",
                true,
                &[
                    "gluon_graalvm",
                    "GLUON_GRAALVM",
                    "gluongraalvm",
                    "GLUONGRAALVM",
                    "gluon graalvm",
                    "Gluon GraalVM",
                    "GluonGraalVM",
                ],
            ),
            Distribution::GraalVmCe8 => entry(
                "GraalVM CE8",
                "graalvm_ce8",
                false,
                &["graalvm_ce8", "GraalVM CE 8", "GraalVMCE8", "GraalVM_CE8"],
            ),
            Distribution::GraalVmCe11 => entry(
                "GraalVM CE11",
                "graalvm_ce11",
                true,
                &["graalvm_ce11", "GraalVM CE 11", "GraalVMCE11", "GraalVM_CE11"],
            ),
            Distribution::GraalVmCe16 => entry(
                "GraalVM CE16",
                "graalvm_ce16",
                true,
                &["graalvm_ce16", "GraalVM CE 16", "GraalVMCE16", "GraalVM_CE16"],
            ),
            Distribution::GraalVmCe17 => entry(
                "GraalVM CE17",
                "graalvm_ce17",
                true,
                &["graalvm_ce17", "GraalVM CE 17", "GraalVMCE17", "GraalVM_CE17"],
            ),
            Distribution::JetBrains => entry(
                "JetBrains",
                "jetbrains",
                true,
                &["jetbrains", "JETBRAINS", "JetBrains"],
            ),
            Distribution::Kona => entry("Kona", "kona", true, &["kona", "KONA", "Kona"]),
            Distribution::Liberica => entry(
                "Liberica",
                "liberica",
                true,
                &["liberica", "LIBERICA", "Liberica"],
            ),
            Distribution::LibericaNative => entry(
                "Liberica Native",
                "liberica_native",
                true,
                &[
                    "liberica_native",
                    "LIBERICA_NATIVE",
                    "libericaNative",
                    "LibericaNative",
                    "liberica native",
                    "LIBERICA NATIVE",
                    "Liberica Native",
                ],
            ),
            Distribution::Mandrel => entry("Mandrel", "mandrel", true, &["mandrel", "MANDREL", "Mandrel"]),
            Distribution::Microsoft => entry(
                "Microsoft",
                "microsoft",
                true,
                &["microsoft", "MICROSOFT", "Microsoft"],
            ),
            Distribution::OjdkBuild => entry(
                "OJDK Build",
                "ojdk_build",
                true,
                &[
                    "ojdk_build",
                    "OJDK_BUILD",
                    "OJDK Build",
                    "ojdk build",
                    "ojdkbuild",
                    "OJDKBuild",
                ],
            ),
            Distribution::OpenLogic => entry(
                "OpenLogic",
                "openlogic",
                true,
                &[
                    "openlogic",
                    "OPENLOGIC",
                    "OpenLogic",
                    "open_logic",
                    "OPEN_LOGIC",
                    "Open Logic",
                    "OPEN LOGIC",
                    "open logic",
                ],
            ),
            Distribution::Oracle => entry("Oracle", "oracle", true, &["oracle", "ORACLE", "Oracle"]),
            Distribution::OracleOpenJdk => entry(
                "Oracle OpenJDK",
                "oracle_open_jdk",
                true,
                &[
                    "oracle_open_jdk",
                    "ORACLE_OPEN_JDK",
                    "oracle_openjdk",
                    "ORACLE_OPENJDK",
                    "Oracle_OpenJDK",
                    "Oracle OpenJDK",
                    "oracle openjdk",
                    "ORACLE OPENJDK",
                    "open_jdk",
                    "openjdk",
                    "OpenJDK",
                    "Open JDK",
                    "OPEN_JDK",
                    "open-jdk",
                    "OPEN-JDK",
                    "Oracle-OpenJDK",
                    "oracle-openjdk",
                    "ORACLE-OPENJDK",
                    "oracle-open-jdk",
                    "ORACLE-OPEN-JDK",
                ],
            ),
            Distribution::SapMachine => entry(
                "SAP Machine",
                "sap_machine",
                true,
                &[
                    "sap_machine",
                    "sapmachine",
                    "SAPMACHINE",
                    "SAP_MACHINE",
                    "SAPMachine",
                    "SAP Machine",
                    "sap-machine",
                    "SAP-Machine",
                    "SAP-MACHINE",
                ],
            ),
            Distribution::Semeru => entry("Semeru", "semeru", true, &["semeru", "Semeru", "SEMERU"]),
            Distribution::SemeruCertified => entry(
                "Semeru certified",
                "semeru_certified",
                true,
                &[
                    "semeru_certified",
                    "SEMERU_CERTIFIED",
                    "Semeru_Certified",
                    "Semeru_certified",
                    "semeru certified",
                    "SEMERU CERTIFIED",
                    "Semeru Certified",
                    "Semeru certified",
                ],
            ),
            Distribution::Temurin => entry("Temurin", "temurin", true, &["temurin", "TEMURIN", "Temurin"]),
            Distribution::Trava => entry("Trava", "trava", true, &["trava", "TRAVA", "Trava"]),
            Distribution::Zulu => entry(
                "Zulu",
                "zulu",
                true,
                &[
                    "zulu",
                    "ZULU",
                    "Zulu",
                    "zulucore",
                    "ZULUCORE",
                    "ZuluCore",
                    "zulu_core",
                    "ZULU_CORE",
                    "Zulu_Core",
                    "zulu core",
                    "ZULU CORE",
                    "Zulu Core",
                ],
            ),
            Distribution::ZuluPrime => entry(
                "Zulu Prime",
                "zulu_prime",
                true,
                &[
                    "zing",
                    "ZING",
                    "Zing",
                    "prime",
                    "PRIME",
                    "Prime",
                    "zuluprime",
                    "ZULUPRIME",
                    "ZuluPrime",
                    "zulu_prime",
                    "ZULU_PRIME",
                    "Zulu_Prime",
                    "zulu prime",
                    "ZULU PRIME",
                    "Zulu Prime",
                ],
            ),
        }
    }

    /// Whether the vendor still publishes builds.
    pub fn is_maintained(self) -> bool {
        self.info().maintained
    }

    /// All distributions ordered by their display label.
    pub fn sorted_by_label() -> Vec<Distribution> {
        let mut distributions = ALL.to_vec();
        distributions.sort_by_key(|d| d.label().to_lowercase());
        distributions
    }
}

impl CanonicalValue for Distribution {
    const KIND: FieldKind = FieldKind::Distribution;

    fn variants() -> &'static [Self] {
        ALL
    }

    fn api_string(self) -> &'static str {
        self.info().api
    }

    fn label(self) -> &'static str {
        self.info().label
    }

    fn synonyms(self) -> &'static [&'static str] {
        self.info().synonyms
    }
}

impl FromStr for Distribution {
    type Err = DiscoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s).ok_or_else(|| DiscoError::FieldNotFound {
            kind: FieldKind::Distribution,
            input: s.to_string(),
        })
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_string())
    }
}
