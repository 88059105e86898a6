// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Static IFC schema table
//!
//! One row per registered entity type: the [`IfcType`] variant, the type code
//! constant, the direct supertype and the attributes the type declares itself
//! (inherited attributes live on the ancestors). Attribute layouts follow IFC4,
//! which stays positionally compatible with IFC2X3 for the types both share.
//! The facility, alignment and geotechnical rows follow IFC4X3.

use crate::TypeCode;
use std::fmt;
use std::str::FromStr;

/// One entry of the static schema table
#[derive(Debug, Clone, Copy)]
pub struct SchemaRow {
    /// Type code (CRC-32 of the upper-case name)
    pub code: TypeCode,
    /// Upper-case type name, e.g. `IFCWALL`
    pub name: &'static str,
    /// Direct supertype, `None` for roots
    pub parent: Option<TypeCode>,
    /// Attributes declared by this type, in schema order
    pub attributes: &'static [&'static str],
}

macro_rules! schema_parent {
    (None) => {
        None
    };
    ($parent:ident) => {
        Some(codes::$parent)
    };
}

macro_rules! ifc_schema {
    ($( $variant:ident, $konst:ident = $code:literal, $parent:ident, [$($attr:literal),*]; )*) => {
        /// IFC entity type enumeration
        ///
        /// Covers every registered IFC entity type. Unknown types are captured
        /// with their original (upper-cased) name.
        #[derive(Clone, PartialEq, Eq, Hash, Debug)]
        pub enum IfcType {
            $( $variant, )*
            /// Type not present in the static table
            Unknown(String),
        }

        /// Type code constants, named after the upper-case type names
        pub mod codes {
            use crate::TypeCode;
            $( pub const $konst: TypeCode = TypeCode($code); )*
        }

        /// The static schema table, supertypes listed before their subtypes
        pub static SCHEMA_ROWS: &[SchemaRow] = &[
            $(
                SchemaRow {
                    code: codes::$konst,
                    name: stringify!($konst),
                    parent: schema_parent!($parent),
                    attributes: &[$($attr),*],
                },
            )*
        ];

        impl IfcType {
            /// Parse a type name string into an IfcType
            pub fn parse(s: &str) -> Self {
                match s {
                    $( stringify!($konst) => IfcType::$variant, )*
                    _ => {
                        let upper = s.to_ascii_uppercase();
                        if upper == s {
                            IfcType::Unknown(upper)
                        } else {
                            Self::parse(&upper)
                        }
                    }
                }
            }

            /// Look up the variant for a type code
            pub fn from_code(code: TypeCode) -> Option<Self> {
                match code.0 {
                    $( $code => Some(IfcType::$variant), )*
                    _ => None,
                }
            }

            /// Type code, `None` for unknown types
            pub fn code(&self) -> Option<TypeCode> {
                match self {
                    $( IfcType::$variant => Some(codes::$konst), )*
                    IfcType::Unknown(_) => None,
                }
            }

            /// Get the upper-case type name
            pub fn name(&self) -> &str {
                match self {
                    $( IfcType::$variant => stringify!($konst), )*
                    IfcType::Unknown(s) => s,
                }
            }
        }
    };
}

ifc_schema! {
    // Root and context
    IfcRoot, IFCROOT = 2341007311, None, ["GlobalId", "OwnerHistory", "Name", "Description"];
    IfcObjectDefinition, IFCOBJECTDEFINITION = 219451334, IFCROOT, [];
    IfcObject, IFCOBJECT = 3888040117, IFCOBJECTDEFINITION, ["ObjectType"];
    IfcContext, IFCCONTEXT = 3419103109, IFCOBJECTDEFINITION, ["ObjectType", "LongName", "Phase", "RepresentationContexts", "UnitsInContext"];
    IfcProject, IFCPROJECT = 103090709, IFCCONTEXT, [];
    IfcProjectLibrary, IFCPROJECTLIBRARY = 653396225, IFCCONTEXT, [];
    IfcProduct, IFCPRODUCT = 4208778838, IFCOBJECT, ["ObjectPlacement", "Representation"];

    // Spatial structure
    IfcSpatialElement, IFCSPATIALELEMENT = 1412071761, IFCPRODUCT, ["LongName"];
    IfcSpatialStructureElement, IFCSPATIALSTRUCTUREELEMENT = 2706606064, IFCSPATIALELEMENT, ["CompositionType"];
    IfcSite, IFCSITE = 4097777520, IFCSPATIALSTRUCTUREELEMENT, ["RefLatitude", "RefLongitude", "RefElevation", "LandTitleNumber", "SiteAddress"];
    IfcBuilding, IFCBUILDING = 4031249490, IFCSPATIALSTRUCTUREELEMENT, ["ElevationOfRefHeight", "ElevationOfTerrain", "BuildingAddress"];
    IfcBuildingStorey, IFCBUILDINGSTOREY = 3124254112, IFCSPATIALSTRUCTUREELEMENT, ["Elevation"];
    IfcSpace, IFCSPACE = 3856911033, IFCSPATIALSTRUCTUREELEMENT, ["PredefinedType", "ElevationWithFlooring"];
    IfcFacility, IFCFACILITY = 24185140, IFCSPATIALSTRUCTUREELEMENT, [];
    IfcFacilityPart, IFCFACILITYPART = 1310830890, IFCSPATIALSTRUCTUREELEMENT, ["UsageType"];
    IfcBridge, IFCBRIDGE = 644574406, IFCFACILITY, ["PredefinedType"];
    IfcRoad, IFCROAD = 146592293, IFCFACILITY, ["PredefinedType"];
    IfcRailway, IFCRAILWAY = 3992365140, IFCFACILITY, ["PredefinedType"];
    IfcBridgePart, IFCBRIDGEPART = 963979645, IFCFACILITYPART, ["PredefinedType"];
    IfcRoadPart, IFCROADPART = 550521510, IFCFACILITYPART, ["PredefinedType"];
    IfcRailwayPart, IFCRAILWAYPART = 1891881377, IFCFACILITYPART, ["PredefinedType"];
    IfcSpatialZone, IFCSPATIALZONE = 463610769, IFCSPATIALELEMENT, ["PredefinedType"];
    IfcExternalSpatialStructureElement, IFCEXTERNALSPATIALSTRUCTUREELEMENT = 2853485674, IFCSPATIALELEMENT, [];
    IfcExternalSpatialElement, IFCEXTERNALSPATIALELEMENT = 1209101575, IFCEXTERNALSPATIALSTRUCTUREELEMENT, ["PredefinedType"];

    // Elements
    IfcElement, IFCELEMENT = 1758889154, IFCPRODUCT, ["Tag"];
    IfcBuildingElement, IFCBUILDINGELEMENT = 3299480353, IFCELEMENT, [];
    IfcWall, IFCWALL = 2391406946, IFCBUILDINGELEMENT, ["PredefinedType"];
    IfcWallStandardCase, IFCWALLSTANDARDCASE = 3512223829, IFCWALL, [];
    IfcWallElementedCase, IFCWALLELEMENTEDCASE = 4156078855, IFCWALL, [];
    IfcCurtainWall, IFCCURTAINWALL = 3495092785, IFCBUILDINGELEMENT, ["PredefinedType"];
    IfcSlab, IFCSLAB = 1529196076, IFCBUILDINGELEMENT, ["PredefinedType"];
    IfcSlabStandardCase, IFCSLABSTANDARDCASE = 3027962421, IFCSLAB, [];
    IfcSlabElementedCase, IFCSLABELEMENTEDCASE = 3127900445, IFCSLAB, [];
    IfcRoof, IFCROOF = 2016517767, IFCBUILDINGELEMENT, ["PredefinedType"];
    IfcBeam, IFCBEAM = 753842376, IFCBUILDINGELEMENT, ["PredefinedType"];
    IfcBeamStandardCase, IFCBEAMSTANDARDCASE = 2906023776, IFCBEAM, [];
    IfcColumn, IFCCOLUMN = 843113511, IFCBUILDINGELEMENT, ["PredefinedType"];
    IfcColumnStandardCase, IFCCOLUMNSTANDARDCASE = 905975707, IFCCOLUMN, [];
    IfcDoor, IFCDOOR = 395920057, IFCBUILDINGELEMENT, ["OverallHeight", "OverallWidth", "PredefinedType", "OperationType", "UserDefinedOperationType"];
    IfcDoorStandardCase, IFCDOORSTANDARDCASE = 3242481149, IFCDOOR, [];
    IfcWindow, IFCWINDOW = 3304561284, IFCBUILDINGELEMENT, ["OverallHeight", "OverallWidth", "PredefinedType", "PartitioningType", "UserDefinedPartitioningType"];
    IfcWindowStandardCase, IFCWINDOWSTANDARDCASE = 486154966, IFCWINDOW, [];
    IfcStair, IFCSTAIR = 331165859, IFCBUILDINGELEMENT, ["PredefinedType"];
    IfcStairFlight, IFCSTAIRFLIGHT = 4252922144, IFCBUILDINGELEMENT, ["NumberOfRisers", "NumberOfTreads", "RiserHeight", "TreadLength", "PredefinedType"];
    IfcRamp, IFCRAMP = 3024970846, IFCBUILDINGELEMENT, ["PredefinedType"];
    IfcRampFlight, IFCRAMPFLIGHT = 3283111854, IFCBUILDINGELEMENT, ["PredefinedType"];
    IfcRailing, IFCRAILING = 2262370178, IFCBUILDINGELEMENT, ["PredefinedType"];
    IfcCovering, IFCCOVERING = 1973544240, IFCBUILDINGELEMENT, ["PredefinedType"];
    IfcPlate, IFCPLATE = 3171933400, IFCBUILDINGELEMENT, ["PredefinedType"];
    IfcPlateStandardCase, IFCPLATESTANDARDCASE = 1156407060, IFCPLATE, [];
    IfcMember, IFCMEMBER = 1073191201, IFCBUILDINGELEMENT, ["PredefinedType"];
    IfcMemberStandardCase, IFCMEMBERSTANDARDCASE = 1911478936, IFCMEMBER, [];
    IfcFooting, IFCFOOTING = 900683007, IFCBUILDINGELEMENT, ["PredefinedType"];
    IfcPile, IFCPILE = 1687234759, IFCBUILDINGELEMENT, ["PredefinedType", "ConstructionType"];
    IfcBuildingElementProxy, IFCBUILDINGELEMENTPROXY = 1095909175, IFCBUILDINGELEMENT, ["PredefinedType"];
    IfcFurnishingElement, IFCFURNISHINGELEMENT = 263784265, IFCELEMENT, [];
    IfcFurniture, IFCFURNITURE = 1509553395, IFCFURNISHINGELEMENT, ["PredefinedType"];
    IfcSystemFurnitureElement, IFCSYSTEMFURNITUREELEMENT = 413509423, IFCFURNISHINGELEMENT, ["PredefinedType"];
    IfcDistributionElement, IFCDISTRIBUTIONELEMENT = 1945004755, IFCELEMENT, [];
    IfcDistributionFlowElement, IFCDISTRIBUTIONFLOWELEMENT = 3040386961, IFCDISTRIBUTIONELEMENT, [];
    IfcFlowTerminal, IFCFLOWTERMINAL = 2223149337, IFCDISTRIBUTIONFLOWELEMENT, [];
    IfcFlowSegment, IFCFLOWSEGMENT = 987401354, IFCDISTRIBUTIONFLOWELEMENT, [];
    IfcFlowFitting, IFCFLOWFITTING = 4278956645, IFCDISTRIBUTIONFLOWELEMENT, [];
    IfcFlowController, IFCFLOWCONTROLLER = 2058353004, IFCDISTRIBUTIONFLOWELEMENT, [];
    IfcFlowMovingDevice, IFCFLOWMOVINGDEVICE = 3132237377, IFCDISTRIBUTIONFLOWELEMENT, [];
    IfcFlowStorageDevice, IFCFLOWSTORAGEDEVICE = 707683696, IFCDISTRIBUTIONFLOWELEMENT, [];
    IfcFlowTreatmentDevice, IFCFLOWTREATMENTDEVICE = 3508470533, IFCDISTRIBUTIONFLOWELEMENT, [];
    IfcEnergyConversionDevice, IFCENERGYCONVERSIONDEVICE = 1658829314, IFCDISTRIBUTIONFLOWELEMENT, [];
    IfcDistributionControlElement, IFCDISTRIBUTIONCONTROLELEMENT = 1062813311, IFCDISTRIBUTIONELEMENT, [];
    IfcFeatureElement, IFCFEATUREELEMENT = 2827207264, IFCELEMENT, [];
    IfcFeatureElementSubtraction, IFCFEATUREELEMENTSUBTRACTION = 1287392070, IFCFEATUREELEMENT, [];
    IfcOpeningElement, IFCOPENINGELEMENT = 3588315303, IFCFEATUREELEMENTSUBTRACTION, ["PredefinedType"];
    IfcOpeningStandardCase, IFCOPENINGSTANDARDCASE = 3079942009, IFCOPENINGELEMENT, [];
    IfcVoidingFeature, IFCVOIDINGFEATURE = 926996030, IFCFEATUREELEMENTSUBTRACTION, ["PredefinedType"];
    IfcFeatureElementAddition, IFCFEATUREELEMENTADDITION = 2143335405, IFCFEATUREELEMENT, [];
    IfcProjectionElement, IFCPROJECTIONELEMENT = 3651124850, IFCFEATUREELEMENTADDITION, ["PredefinedType"];
    IfcGeotechnicalElement, IFCGEOTECHNICALELEMENT = 4230923436, IFCELEMENT, [];
    IfcGeotechnicalAssembly, IFCGEOTECHNICALASSEMBLY = 2713699986, IFCGEOTECHNICALELEMENT, [];
    IfcBorehole, IFCBOREHOLE = 3314249567, IFCGEOTECHNICALASSEMBLY, [];
    IfcPositioningElement, IFCPOSITIONINGELEMENT = 1946335990, IFCPRODUCT, [];
    IfcLinearPositioningElement, IFCLINEARPOSITIONINGELEMENT = 1154579445, IFCPOSITIONINGELEMENT, [];
    IfcAlignment, IFCALIGNMENT = 325726236, IFCLINEARPOSITIONINGELEMENT, ["PredefinedType"];
    IfcLinearElement, IFCLINEARELEMENT = 2176059722, IFCPRODUCT, [];
    IfcAlignmentCant, IFCALIGNMENTCANT = 4266260250, IFCLINEARELEMENT, ["RailHeadDistance"];
    IfcAlignmentHorizontal, IFCALIGNMENTHORIZONTAL = 1545765605, IFCLINEARELEMENT, [];
    IfcAlignmentVertical, IFCALIGNMENTVERTICAL = 1662888072, IFCLINEARELEMENT, [];
    IfcAlignmentSegment, IFCALIGNMENTSEGMENT = 317615605, IFCLINEARELEMENT, ["DesignParameters"];

    // Relationships
    IfcRelationship, IFCRELATIONSHIP = 478536968, IFCROOT, [];
    IfcRelDecomposes, IFCRELDECOMPOSES = 2551354335, IFCRELATIONSHIP, [];
    IfcRelAggregates, IFCRELAGGREGATES = 160246688, IFCRELDECOMPOSES, ["RelatingObject", "RelatedObjects"];
    IfcRelNests, IFCRELNESTS = 3268803585, IFCRELDECOMPOSES, ["RelatingObject", "RelatedObjects"];
    IfcRelVoidsElement, IFCRELVOIDSELEMENT = 1401173127, IFCRELDECOMPOSES, ["RelatingBuildingElement", "RelatedOpeningElement"];
    IfcRelConnects, IFCRELCONNECTS = 826625072, IFCRELATIONSHIP, [];
    IfcRelContainedInSpatialStructure, IFCRELCONTAINEDINSPATIALSTRUCTURE = 3242617779, IFCRELCONNECTS, ["RelatedElements", "RelatingStructure"];
    IfcRelFillsElement, IFCRELFILLSELEMENT = 3940055652, IFCRELCONNECTS, ["RelatingOpeningElement", "RelatedBuildingElement"];
    IfcRelConnectsElements, IFCRELCONNECTSELEMENTS = 1204542856, IFCRELCONNECTS, ["ConnectionGeometry", "RelatingElement", "RelatedElement"];
    IfcRelConnectsPathElements, IFCRELCONNECTSPATHELEMENTS = 3945020480, IFCRELCONNECTSELEMENTS, ["RelatingPriorities", "RelatedPriorities", "RelatedConnectionType", "RelatingConnectionType"];
    IfcRelSpaceBoundary, IFCRELSPACEBOUNDARY = 3451746338, IFCRELCONNECTS, ["RelatingSpace", "RelatedBuildingElement", "ConnectionGeometry", "PhysicalOrVirtualBoundary", "InternalOrExternalBoundary"];
    IfcRelDefines, IFCRELDEFINES = 693640335, IFCRELATIONSHIP, [];
    IfcRelDefinesByProperties, IFCRELDEFINESBYPROPERTIES = 4186316022, IFCRELDEFINES, ["RelatedObjects", "RelatingPropertyDefinition"];
    IfcRelDefinesByType, IFCRELDEFINESBYTYPE = 781010003, IFCRELDEFINES, ["RelatedObjects", "RelatingType"];
    IfcRelAssociates, IFCRELASSOCIATES = 1865459582, IFCRELATIONSHIP, ["RelatedObjects"];
    IfcRelAssociatesMaterial, IFCRELASSOCIATESMATERIAL = 2655215786, IFCRELASSOCIATES, ["RelatingMaterial"];

    // Property definitions
    IfcPropertyDefinition, IFCPROPERTYDEFINITION = 1680319473, IFCROOT, [];
    IfcPropertySetDefinition, IFCPROPERTYSETDEFINITION = 3357820518, IFCPROPERTYDEFINITION, [];
    IfcPropertySet, IFCPROPERTYSET = 1451395588, IFCPROPERTYSETDEFINITION, ["HasProperties"];
    IfcQuantitySet, IFCQUANTITYSET = 2090586900, IFCPROPERTYSETDEFINITION, [];
    IfcElementQuantity, IFCELEMENTQUANTITY = 1883228015, IFCQUANTITYSET, ["MethodOfMeasurement", "Quantities"];
    IfcPropertyAbstraction, IFCPROPERTYABSTRACTION = 986844984, None, [];
    IfcProperty, IFCPROPERTY = 2598011224, IFCPROPERTYABSTRACTION, ["Name", "Description"];
    IfcSimpleProperty, IFCSIMPLEPROPERTY = 3692461612, IFCPROPERTY, [];
    IfcPropertySingleValue, IFCPROPERTYSINGLEVALUE = 3650150729, IFCSIMPLEPROPERTY, ["NominalValue", "Unit"];
    IfcPropertyEnumeratedValue, IFCPROPERTYENUMERATEDVALUE = 4166981789, IFCSIMPLEPROPERTY, ["EnumerationValues", "EnumerationReference"];
    IfcPropertyBoundedValue, IFCPROPERTYBOUNDEDVALUE = 871118103, IFCSIMPLEPROPERTY, ["UpperBoundValue", "LowerBoundValue", "Unit", "SetPointValue"];
    IfcPropertyListValue, IFCPROPERTYLISTVALUE = 2752243245, IFCSIMPLEPROPERTY, ["ListValues", "Unit"];
    IfcComplexProperty, IFCCOMPLEXPROPERTY = 2542286263, IFCPROPERTY, ["UsageName", "HasProperties"];
    IfcPropertyTableValue, IFCPROPERTYTABLEVALUE = 110355661, IFCSIMPLEPROPERTY, ["DefiningValues", "DefinedValues", "Expression", "DefiningUnit", "DefinedUnit", "CurveInterpolation"];

    // Quantities
    IfcPhysicalQuantity, IFCPHYSICALQUANTITY = 2483315170, None, ["Name", "Description"];
    IfcPhysicalSimpleQuantity, IFCPHYSICALSIMPLEQUANTITY = 2226359599, IFCPHYSICALQUANTITY, ["Unit"];
    IfcQuantityLength, IFCQUANTITYLENGTH = 931644368, IFCPHYSICALSIMPLEQUANTITY, ["LengthValue", "Formula"];
    IfcQuantityArea, IFCQUANTITYAREA = 2044713172, IFCPHYSICALSIMPLEQUANTITY, ["AreaValue", "Formula"];
    IfcQuantityVolume, IFCQUANTITYVOLUME = 2405470396, IFCPHYSICALSIMPLEQUANTITY, ["VolumeValue", "Formula"];
    IfcQuantityCount, IFCQUANTITYCOUNT = 2093928680, IFCPHYSICALSIMPLEQUANTITY, ["CountValue", "Formula"];
    IfcQuantityWeight, IFCQUANTITYWEIGHT = 825690147, IFCPHYSICALSIMPLEQUANTITY, ["WeightValue", "Formula"];
    IfcQuantityTime, IFCQUANTITYTIME = 3252649465, IFCPHYSICALSIMPLEQUANTITY, ["TimeValue", "Formula"];

    // Type objects
    IfcTypeObject, IFCTYPEOBJECT = 1628702193, IFCOBJECTDEFINITION, ["ApplicableOccurrence", "HasPropertySets"];
    IfcTypeProduct, IFCTYPEPRODUCT = 2347495698, IFCTYPEOBJECT, ["RepresentationMaps", "Tag"];
    IfcElementType, IFCELEMENTTYPE = 339256511, IFCTYPEPRODUCT, ["ElementType"];
    IfcBuildingElementType, IFCBUILDINGELEMENTTYPE = 1950629157, IFCELEMENTTYPE, [];
    IfcWallType, IFCWALLTYPE = 1898987631, IFCBUILDINGELEMENTTYPE, ["PredefinedType"];
    IfcSlabType, IFCSLABTYPE = 2533589738, IFCBUILDINGELEMENTTYPE, ["PredefinedType"];
    IfcBeamType, IFCBEAMTYPE = 819618141, IFCBUILDINGELEMENTTYPE, ["PredefinedType"];
    IfcColumnType, IFCCOLUMNTYPE = 300633059, IFCBUILDINGELEMENTTYPE, ["PredefinedType"];
    IfcCoveringType, IFCCOVERINGTYPE = 1916426348, IFCBUILDINGELEMENTTYPE, ["PredefinedType"];
    IfcRailingType, IFCRAILINGTYPE = 2893384427, IFCBUILDINGELEMENTTYPE, ["PredefinedType"];
    IfcMemberType, IFCMEMBERTYPE = 3181161470, IFCBUILDINGELEMENTTYPE, ["PredefinedType"];
    IfcPlateType, IFCPLATETYPE = 4017108033, IFCBUILDINGELEMENTTYPE, ["PredefinedType"];
    IfcBuildingElementProxyType, IFCBUILDINGELEMENTPROXYTYPE = 1909888760, IFCBUILDINGELEMENTTYPE, ["PredefinedType"];
    IfcDoorType, IFCDOORTYPE = 2323601079, IFCBUILDINGELEMENTTYPE, ["PredefinedType", "OperationType", "ParameterTakesPrecedence", "UserDefinedOperationType"];
    IfcWindowType, IFCWINDOWTYPE = 4009809668, IFCBUILDINGELEMENTTYPE, ["PredefinedType", "PartitioningType", "ParameterTakesPrecedence", "UserDefinedPartitioningType"];
    IfcStairType, IFCSTAIRTYPE = 338393293, IFCBUILDINGELEMENTTYPE, ["PredefinedType"];
    IfcStairFlightType, IFCSTAIRFLIGHTTYPE = 1039846685, IFCBUILDINGELEMENTTYPE, ["PredefinedType"];
    IfcRampType, IFCRAMPTYPE = 1469900589, IFCBUILDINGELEMENTTYPE, ["PredefinedType"];
    IfcRampFlightType, IFCRAMPFLIGHTTYPE = 2324767716, IFCBUILDINGELEMENTTYPE, ["PredefinedType"];
    IfcRoofType, IFCROOFTYPE = 2781568857, IFCBUILDINGELEMENTTYPE, ["PredefinedType"];
    IfcFootingType, IFCFOOTINGTYPE = 1893162501, IFCBUILDINGELEMENTTYPE, ["PredefinedType"];
    IfcPileType, IFCPILETYPE = 1158309216, IFCBUILDINGELEMENTTYPE, ["PredefinedType"];

    // Materials
    IfcMaterialDefinition, IFCMATERIALDEFINITION = 760658860, None, [];
    IfcMaterial, IFCMATERIAL = 1838606355, IFCMATERIALDEFINITION, ["Name", "Description", "Category"];
    IfcMaterialLayer, IFCMATERIALLAYER = 248100487, IFCMATERIALDEFINITION, ["Material", "LayerThickness", "IsVentilated", "Name", "Description", "Category", "Priority"];
    IfcMaterialLayerSet, IFCMATERIALLAYERSET = 3303938423, IFCMATERIALDEFINITION, ["MaterialLayers", "LayerSetName", "Description"];
    IfcMaterialConstituent, IFCMATERIALCONSTITUENT = 3708119000, IFCMATERIALDEFINITION, ["Name", "Description", "Material", "Fraction", "Category"];
    IfcMaterialConstituentSet, IFCMATERIALCONSTITUENTSET = 2852063980, IFCMATERIALDEFINITION, ["Name", "Description", "MaterialConstituents"];
    IfcMaterialProfile, IFCMATERIALPROFILE = 2235152071, IFCMATERIALDEFINITION, ["Name", "Description", "Material", "Profile", "Priority", "Category"];
    IfcMaterialProfileSet, IFCMATERIALPROFILESET = 164193824, IFCMATERIALDEFINITION, ["Name", "Description", "MaterialProfiles", "CompositeProfile"];
    IfcMaterialUsageDefinition, IFCMATERIALUSAGEDEFINITION = 1507914824, None, [];
    IfcMaterialLayerSetUsage, IFCMATERIALLAYERSETUSAGE = 1303795690, IFCMATERIALUSAGEDEFINITION, ["ForLayerSet", "LayerSetDirection", "DirectionSense", "OffsetFromReferenceLine", "ReferenceExtent"];
    IfcMaterialProfileSetUsage, IFCMATERIALPROFILESETUSAGE = 3079605661, IFCMATERIALUSAGEDEFINITION, ["ForProfileSet", "CardinalPoint", "ReferenceExtent"];
    IfcMaterialList, IFCMATERIALLIST = 2199411900, None, ["Materials"];

    // Actors and ownership
    IfcOwnerHistory, IFCOWNERHISTORY = 1207048766, None, ["OwningUser", "OwningApplication", "State", "ChangeAction", "LastModifiedDate", "LastModifyingUser", "LastModifyingApplication", "CreationDate"];
    IfcPerson, IFCPERSON = 2077209135, None, ["Identification", "FamilyName", "GivenName", "MiddleNames", "PrefixTitles", "SuffixTitles", "Roles", "Addresses"];
    IfcOrganization, IFCORGANIZATION = 4251960020, None, ["Identification", "Name", "Description", "Roles", "Addresses"];
    IfcPersonAndOrganization, IFCPERSONANDORGANIZATION = 101040310, None, ["ThePerson", "TheOrganization", "Roles"];
    IfcApplication, IFCAPPLICATION = 639542469, None, ["ApplicationDeveloper", "Version", "ApplicationFullName", "ApplicationIdentifier"];

    // Units
    IfcUnitAssignment, IFCUNITASSIGNMENT = 180925521, None, ["Units"];
    IfcNamedUnit, IFCNAMEDUNIT = 1918398963, None, ["Dimensions", "UnitType"];
    IfcSIUnit, IFCSIUNIT = 448429030, IFCNAMEDUNIT, ["Prefix", "Name"];
    IfcConversionBasedUnit, IFCCONVERSIONBASEDUNIT = 2889183280, IFCNAMEDUNIT, ["Name", "ConversionFactor"];
    IfcDerivedUnit, IFCDERIVEDUNIT = 1765591967, None, ["Elements", "UnitType", "UserDefinedType"];
    IfcDerivedUnitElement, IFCDERIVEDUNITELEMENT = 1045800335, None, ["Unit", "Exponent"];
    IfcMeasureWithUnit, IFCMEASUREWITHUNIT = 2597039031, None, ["ValueComponent", "UnitComponent"];
    IfcDimensionalExponents, IFCDIMENSIONALEXPONENTS = 2949456006, None, ["LengthExponent", "MassExponent", "TimeExponent", "ElectricCurrentExponent", "ThermodynamicTemperatureExponent", "AmountOfSubstanceExponent", "LuminousIntensityExponent"];

    // Representation, placement and geometry
    IfcRepresentationItem, IFCREPRESENTATIONITEM = 3008791417, None, [];
    IfcGeometricRepresentationItem, IFCGEOMETRICREPRESENTATIONITEM = 2453401579, IFCREPRESENTATIONITEM, [];
    IfcPoint, IFCPOINT = 2067069095, IFCGEOMETRICREPRESENTATIONITEM, [];
    IfcCartesianPoint, IFCCARTESIANPOINT = 1123145078, IFCPOINT, ["Coordinates"];
    IfcDirection, IFCDIRECTION = 32440307, IFCGEOMETRICREPRESENTATIONITEM, ["DirectionRatios"];
    IfcVector, IFCVECTOR = 1417489154, IFCGEOMETRICREPRESENTATIONITEM, ["Orientation", "Magnitude"];
    IfcPlacement, IFCPLACEMENT = 2004835150, IFCGEOMETRICREPRESENTATIONITEM, ["Location"];
    IfcAxis2Placement2D, IFCAXIS2PLACEMENT2D = 3125803723, IFCPLACEMENT, ["RefDirection"];
    IfcAxis2Placement3D, IFCAXIS2PLACEMENT3D = 2740243338, IFCPLACEMENT, ["Axis", "RefDirection"];
    IfcObjectPlacement, IFCOBJECTPLACEMENT = 3701648758, None, [];
    IfcLocalPlacement, IFCLOCALPLACEMENT = 2624227202, IFCOBJECTPLACEMENT, ["PlacementRelTo", "RelativePlacement"];
    IfcProductRepresentation, IFCPRODUCTREPRESENTATION = 2095639259, None, ["Name", "Description", "Representations"];
    IfcProductDefinitionShape, IFCPRODUCTDEFINITIONSHAPE = 673634403, IFCPRODUCTREPRESENTATION, [];
    IfcRepresentation, IFCREPRESENTATION = 1076942058, None, ["ContextOfItems", "RepresentationIdentifier", "RepresentationType", "Items"];
    IfcShapeModel, IFCSHAPEMODEL = 3982875396, IFCREPRESENTATION, [];
    IfcShapeRepresentation, IFCSHAPEREPRESENTATION = 4240577450, IFCSHAPEMODEL, [];
    IfcRepresentationContext, IFCREPRESENTATIONCONTEXT = 3377609919, None, ["ContextIdentifier", "ContextType"];
    IfcGeometricRepresentationContext, IFCGEOMETRICREPRESENTATIONCONTEXT = 3448662350, IFCREPRESENTATIONCONTEXT, ["CoordinateSpaceDimension", "Precision", "WorldCoordinateSystem", "TrueNorth"];
    IfcGeometricRepresentationSubContext, IFCGEOMETRICREPRESENTATIONSUBCONTEXT = 4142052618, IFCGEOMETRICREPRESENTATIONCONTEXT, ["ParentContext", "TargetScale", "TargetView", "UserDefinedTargetView"];
    IfcRepresentationMap, IFCREPRESENTATIONMAP = 1660063152, None, ["MappingOrigin", "MappedRepresentation"];
    IfcMappedItem, IFCMAPPEDITEM = 2347385850, IFCREPRESENTATIONITEM, ["MappingSource", "MappingTarget"];
    IfcStyledItem, IFCSTYLEDITEM = 3958052878, IFCREPRESENTATIONITEM, ["Item", "Styles", "Name"];
    IfcPresentationLayerAssignment, IFCPRESENTATIONLAYERASSIGNMENT = 2022622350, None, ["Name", "Description", "AssignedItems", "Identifier"];
    IfcPresentationStyle, IFCPRESENTATIONSTYLE = 3119450353, None, ["Name"];
    IfcSurfaceStyle, IFCSURFACESTYLE = 1300840506, IFCPRESENTATIONSTYLE, ["Side", "Styles"];
    IfcPresentationItem, IFCPRESENTATIONITEM = 677532197, None, [];
    IfcSurfaceStyleShading, IFCSURFACESTYLESHADING = 846575682, IFCPRESENTATIONITEM, ["SurfaceColour", "Transparency"];
    IfcSurfaceStyleRendering, IFCSURFACESTYLERENDERING = 1878645084, IFCSURFACESTYLESHADING, ["DiffuseColour", "TransmissionColour", "DiffuseTransmissionColour", "ReflectionColour", "SpecularColour", "SpecularHighlight", "ReflectanceMethod"];
    IfcColourSpecification, IFCCOLOURSPECIFICATION = 3264961684, IFCPRESENTATIONITEM, ["Name"];
    IfcColourRgb, IFCCOLOURRGB = 776857604, IFCCOLOURSPECIFICATION, ["Red", "Green", "Blue"];
    IfcSolidModel, IFCSOLIDMODEL = 723233188, IFCGEOMETRICREPRESENTATIONITEM, [];
    IfcSweptAreaSolid, IFCSWEPTAREASOLID = 2247615214, IFCSOLIDMODEL, ["SweptArea", "Position"];
    IfcExtrudedAreaSolid, IFCEXTRUDEDAREASOLID = 477187591, IFCSWEPTAREASOLID, ["ExtrudedDirection", "Depth"];
    IfcRevolvedAreaSolid, IFCREVOLVEDAREASOLID = 1856042241, IFCSWEPTAREASOLID, ["Axis", "Angle"];
    IfcManifoldSolidBrep, IFCMANIFOLDSOLIDBREP = 1425443689, IFCSOLIDMODEL, ["Outer"];
    IfcFacetedBrep, IFCFACETEDBREP = 807026263, IFCMANIFOLDSOLIDBREP, [];
    IfcFacetedBrepWithVoids, IFCFACETEDBREPWITHVOIDS = 3737207727, IFCFACETEDBREP, ["Voids"];
    IfcBooleanResult, IFCBOOLEANRESULT = 2736907675, IFCGEOMETRICREPRESENTATIONITEM, ["Operator", "FirstOperand", "SecondOperand"];
    IfcBooleanClippingResult, IFCBOOLEANCLIPPINGRESULT = 3649129432, IFCBOOLEANRESULT, [];
    IfcHalfSpaceSolid, IFCHALFSPACESOLID = 812098782, IFCGEOMETRICREPRESENTATIONITEM, ["BaseSurface", "AgreementFlag"];
    IfcPolygonalBoundedHalfSpace, IFCPOLYGONALBOUNDEDHALFSPACE = 2775532180, IFCHALFSPACESOLID, ["Position", "PolygonalBoundary"];
    IfcBoxedHalfSpace, IFCBOXEDHALFSPACE = 2713105998, IFCHALFSPACESOLID, ["Enclosure"];
    IfcTessellatedItem, IFCTESSELLATEDITEM = 901063453, IFCGEOMETRICREPRESENTATIONITEM, [];
    IfcTessellatedFaceSet, IFCTESSELLATEDFACESET = 2387106220, IFCTESSELLATEDITEM, ["Coordinates"];
    IfcTriangulatedFaceSet, IFCTRIANGULATEDFACESET = 2916149573, IFCTESSELLATEDFACESET, ["Normals", "Closed", "CoordIndex", "PnIndex"];
    IfcPolygonalFaceSet, IFCPOLYGONALFACESET = 2839578677, IFCTESSELLATEDFACESET, ["Closed", "Faces", "PnIndex"];
    IfcTopologicalRepresentationItem, IFCTOPOLOGICALREPRESENTATIONITEM = 1377556343, IFCREPRESENTATIONITEM, [];
    IfcConnectedFaceSet, IFCCONNECTEDFACESET = 370225590, IFCTOPOLOGICALREPRESENTATIONITEM, ["CfsFaces"];
    IfcClosedShell, IFCCLOSEDSHELL = 2205249479, IFCCONNECTEDFACESET, [];
    IfcOpenShell, IFCOPENSHELL = 2665983363, IFCCONNECTEDFACESET, [];
    IfcFace, IFCFACE = 2556980723, IFCTOPOLOGICALREPRESENTATIONITEM, ["Bounds"];
    IfcFaceBound, IFCFACEBOUND = 1809719519, IFCTOPOLOGICALREPRESENTATIONITEM, ["Bound", "Orientation"];
    IfcFaceOuterBound, IFCFACEOUTERBOUND = 803316827, IFCFACEBOUND, [];
    IfcLoop, IFCLOOP = 1008929658, IFCTOPOLOGICALREPRESENTATIONITEM, [];
    IfcPolyLoop, IFCPOLYLOOP = 2924175390, IFCLOOP, ["Polygon"];
    IfcCurve, IFCCURVE = 2601014836, IFCGEOMETRICREPRESENTATIONITEM, [];
    IfcBoundedCurve, IFCBOUNDEDCURVE = 1260505505, IFCCURVE, [];
    IfcPolyline, IFCPOLYLINE = 3724593414, IFCBOUNDEDCURVE, ["Points"];
    IfcCompositeCurve, IFCCOMPOSITECURVE = 3732776249, IFCBOUNDEDCURVE, ["Segments", "SelfIntersect"];
    IfcTrimmedCurve, IFCTRIMMEDCURVE = 3593883385, IFCBOUNDEDCURVE, ["BasisCurve", "Trim1", "Trim2", "SenseAgreement", "MasterRepresentation"];
    IfcIndexedPolyCurve, IFCINDEXEDPOLYCURVE = 2571569899, IFCBOUNDEDCURVE, ["Points", "Segments", "SelfIntersect"];
    IfcConic, IFCCONIC = 2510884976, IFCCURVE, ["Position"];
    IfcCircle, IFCCIRCLE = 2611217952, IFCCONIC, ["Radius"];
    IfcEllipse, IFCELLIPSE = 1704287377, IFCCONIC, ["SemiAxis1", "SemiAxis2"];
    IfcLine, IFCLINE = 1281925730, IFCCURVE, ["Pnt", "Dir"];
    IfcSurface, IFCSURFACE = 2513912981, IFCGEOMETRICREPRESENTATIONITEM, [];
    IfcElementarySurface, IFCELEMENTARYSURFACE = 2777663545, IFCSURFACE, ["Position"];
    IfcPlane, IFCPLANE = 220341763, IFCELEMENTARYSURFACE, [];

    // Profiles
    IfcProfileDef, IFCPROFILEDEF = 3958567839, None, ["ProfileType", "ProfileName"];
    IfcArbitraryClosedProfileDef, IFCARBITRARYCLOSEDPROFILEDEF = 3798115385, IFCPROFILEDEF, ["OuterCurve"];
    IfcParameterizedProfileDef, IFCPARAMETERIZEDPROFILEDEF = 2529465313, IFCPROFILEDEF, ["Position"];
    IfcRectangleProfileDef, IFCRECTANGLEPROFILEDEF = 3615266464, IFCPARAMETERIZEDPROFILEDEF, ["XDim", "YDim"];
    IfcCircleProfileDef, IFCCIRCLEPROFILEDEF = 1383045692, IFCPARAMETERIZEDPROFILEDEF, ["Radius"];
    IfcArbitraryProfileDefWithVoids, IFCARBITRARYPROFILEDEFWITHVOIDS = 2705031697, IFCARBITRARYCLOSEDPROFILEDEF, ["InnerCurves"];
    IfcRectangleHollowProfileDef, IFCRECTANGLEHOLLOWPROFILEDEF = 2770003689, IFCRECTANGLEPROFILEDEF, ["WallThickness", "InnerFilletRadius", "OuterFilletRadius"];
    IfcCircleHollowProfileDef, IFCCIRCLEHOLLOWPROFILEDEF = 2937912522, IFCCIRCLEPROFILEDEF, ["WallThickness"];
    IfcIShapeProfileDef, IFCISHAPEPROFILEDEF = 1484403080, IFCPARAMETERIZEDPROFILEDEF, ["OverallWidth", "OverallDepth", "WebThickness", "FlangeThickness", "FilletRadius", "FlangeEdgeRadius", "FlangeSlope"];
}

impl FromStr for IfcType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Default for IfcType {
    fn default() -> Self {
        IfcType::Unknown(String::new())
    }
}

impl fmt::Display for IfcType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
